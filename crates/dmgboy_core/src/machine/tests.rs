use std::cell::RefCell;
use std::rc::Rc;

use dmgboy_common::key::Key;

use super::cartridge::write_logo;
use super::{GameBoy, JoypadButton, LoadError, LoadOptions, CYCLES_PER_FRAME};
use crate::platform::{ErrorHandler, ErrorKind, LineSink, TraceEvent, TraceSink};

const ENTRY: u16 = 0x0150;
/// `JR -2`: spin in place at 12 cycles per step.
const SPIN: [u8; 2] = [0x18, 0xFE];

/// A valid image of `2 << rom_code` banks. Byte `$2000` of every bank holds
/// the bank number; everything else is zero (NOP).
fn rom_image(cart_type: u8, rom_code: u8, ram_code: u8) -> Vec<u8> {
    let banks = 2usize << rom_code;
    let mut rom = vec![0u8; banks * 0x4000];
    write_logo(&mut rom);
    rom[0x147] = cart_type;
    rom[0x148] = rom_code;
    rom[0x149] = ram_code;
    for bank in 0..banks {
        rom[bank * 0x4000 + 0x2000] = bank as u8;
    }
    rom
}

fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = rom_image(0x00, 0x00, 0x00);
    let start = ENTRY as usize;
    rom[start..start + program.len()].copy_from_slice(program);
    rom
}

fn boot_with(rom: Vec<u8>, options: LoadOptions) -> GameBoy {
    let mut gb = GameBoy::load(rom, options).expect("test ROM should load");
    gb.cpu.regs.pc = ENTRY;
    gb
}

fn boot(program: &[u8]) -> GameBoy {
    boot_with(rom_with_program(program), LoadOptions::default())
}

/// Power-cycle the LCD so the next line starts from cycle 0 in OAM scan.
fn restart_lcd(gb: &mut GameBoy) {
    gb.write8(0xFF40, 0x11);
    gb.write8(0xFF40, 0x91);
}

fn step_n(gb: &mut GameBoy, n: usize) -> u32 {
    (0..n).map(|_| gb.step()).sum()
}

fn stat_mode(gb: &mut GameBoy) -> u8 {
    gb.read8(0xFF41) & 0x03
}

type Shared<T> = Rc<RefCell<Vec<T>>>;

struct Recorder<T>(Shared<T>);

impl LineSink for Recorder<(u8, [u8; 160])> {
    fn draw_line(&mut self, pixels: &[u8; 160], ly: u8) {
        self.0.borrow_mut().push((ly, *pixels));
    }
}

impl ErrorHandler for Recorder<(ErrorKind, u16)> {
    fn handle_error(&mut self, kind: ErrorKind, addr: u16) {
        self.0.borrow_mut().push((kind, addr));
    }
}

impl TraceSink for Recorder<TraceEvent> {
    fn trace(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[test]
fn zero_logo_is_rejected() {
    let mut rom = rom_image(0x00, 0x00, 0x00);
    rom[0x104..0x134].fill(0);
    assert!(matches!(
        GameBoy::load(rom, LoadOptions::default()),
        Err(LoadError::LogoMismatch)
    ));
}

#[test]
fn unsupported_controllers_and_short_images_are_rejected() {
    let rom = rom_image(0x13, 0x00, 0x00);
    assert!(matches!(
        GameBoy::load(rom, LoadOptions::default()),
        Err(LoadError::UnsupportedCartridgeType(0x13))
    ));

    let mut rom = rom_image(0x01, 0x00, 0x00);
    rom[0x148] = 0x01;
    assert!(matches!(
        GameBoy::load(rom, LoadOptions::default()),
        Err(LoadError::Truncated { expected: 0x10000, actual: 0x8000 })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameBoy::load_file("/nonexistent/dmgboy-test.gb", LoadOptions::default());
    assert!(matches!(err, Err(LoadError::Io(_))));
}

#[test]
fn powers_on_in_the_post_boot_state() {
    let mut gb = GameBoy::load(rom_image(0x00, 0x00, 0x00), LoadOptions::default()).unwrap();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    assert_eq!(gb.read8(0xFF00), 0xCF);
    assert_eq!(gb.read8(0xFF04), 0xAB);
    assert_eq!(gb.read8(0xFF0F), 0xE1);
    assert_eq!(gb.read8(0xFF40), 0x91);
    assert_eq!(gb.read8(0xFF41), 0x85);
    assert_eq!(gb.read8(0xFF47), 0xFC);
    assert_eq!(gb.read8(0xFF48), 0xFF);
    assert_eq!(gb.read8(0xFF49), 0xFF);
    assert_eq!(gb.bus.ppu.bg_palette, [0, 3, 3, 3]);
    assert!(gb.lcd_enabled());
}

#[test]
fn rom_bank_selection_is_masked() {
    let mut gb = boot_with(rom_image(0x01, 0x01, 0x00), LoadOptions::default());
    assert_eq!(gb.read8(0x6000), 1);

    gb.write8(0x2000, 0x00);
    assert_eq!(gb.read8(0x6000), 1);
    gb.write8(0x2000, 0x02);
    assert_eq!(gb.read8(0x6000), 2);
    gb.write8(0x2000, 0x05);
    assert_eq!(gb.read8(0x6000), 5 & 0x03);
    gb.write8(0x2000, 0x03);
    assert_eq!(gb.read8(0x6000), 3);

    // Bank 0 is fixed.
    assert_eq!(gb.read8(0x2000), 0);
}

#[test]
fn repeated_rom_reads_agree() {
    let mut gb = boot_with(rom_image(0x01, 0x02, 0x00), LoadOptions::default());
    gb.write8(0x2000, 0x06);
    for addr in [0x0147, 0x2000, 0x4000, 0x6000, 0x7FFF] {
        assert_eq!(gb.read8(addr), gb.read8(addr), "addr {addr:04X}");
    }
}

#[test]
fn plain_rom_ignores_bank_writes() {
    let mut gb = boot(&[]);
    gb.write8(0x2000, 0x00);
    gb.write8(0x6000, 0x01);
    assert_eq!(gb.read8(0x6000), 1);
    assert_eq!(gb.read8(0xA000), 0xFF);
    gb.write8(0xA000, 0x12);
    assert_eq!(gb.read8(0xA000), 0xFF);
}

#[test]
fn mbc1_ram_is_locked_until_enabled_and_banks_in_mode_one() {
    let mut gb = boot_with(rom_image(0x03, 0x00, 0x03), LoadOptions::default());
    gb.write8(0xA000, 0x11);
    assert_eq!(gb.read8(0xA000), 0xFF);

    gb.write8(0x0000, 0x0A);
    gb.write8(0xA000, 0x42);
    assert_eq!(gb.read8(0xA000), 0x42);

    gb.write8(0x6000, 0x01);
    gb.write8(0x4000, 0x02);
    assert_eq!(gb.read8(0xA000), 0x00);
    gb.write8(0xA000, 0x99);
    assert_eq!(gb.cart_ram()[0x0000], 0x42);
    assert_eq!(gb.cart_ram()[0x4000], 0x99);

    gb.write8(0x0000, 0x00);
    assert_eq!(gb.read8(0xA000), 0xFF);
    assert_eq!(gb.cart_ram().len(), 4 * 0x2000);
}

#[test]
fn save_data_seeds_cartridge_ram() {
    let options = LoadOptions::builder().save_data(vec![1, 2, 3]).build();
    let mut gb = boot_with(rom_image(0x03, 0x00, 0x02), options);
    assert_eq!(&gb.cart_ram()[..4], &[1, 2, 3, 0]);

    gb.write8(0x0000, 0x0A);
    assert_eq!(gb.read8(0xA001), 2);
}

#[test]
fn echo_ram_mirrors_work_ram() {
    let mut gb = boot(&[]);
    gb.write8(0xC010, 0xAB);
    assert_eq!(gb.read8(0xE010), 0xAB);
    gb.write8(0xFDFF, 0xCD);
    assert_eq!(gb.read8(0xDDFF), 0xCD);
}

#[test]
fn unusable_region_reads_ff_and_drops_writes() {
    let mut gb = boot(&[]);
    gb.write8(0xFEA0, 0x00);
    gb.write8(0xFEFF, 0x00);
    assert_eq!(gb.read8(0xFEA0), 0xFF);
    assert_eq!(gb.read8(0xFEFF), 0xFF);

    gb.write8(0xFF80, 0x5A);
    assert_eq!(gb.read8(0xFF80), 0x5A);
}

#[test]
fn register_write_masks() {
    let mut gb = boot(&[]);

    gb.write8(0xFF41, 0xFF);
    assert_eq!(gb.read8(0xFF41), 0xFD);
    gb.write8(0xFF41, 0x00);
    assert_eq!(gb.read8(0xFF41), 0x85);

    gb.write8(0xFF0F, 0x01);
    assert_eq!(gb.read8(0xFF0F), 0xE1);

    gb.write8(0xFF44, 0x50);
    assert_eq!(gb.read8(0xFF44), 0x00);

    gb.write8(0xFF07, 0x05);
    assert_eq!(gb.read8(0xFF07), 0xFD);

    gb.write8(0xFF47, 0x1B);
    assert_eq!(gb.bus.ppu.bg_palette, [3, 2, 1, 0]);
    gb.write8(0xFF49, 0xE4);
    assert_eq!(gb.bus.ppu.sp_palette[4..], [0, 1, 2, 3]);
}

#[test]
fn div_counts_every_256_cycles_and_resets_on_write() {
    let mut gb = boot(&[]);
    gb.write8(0xFF04, 0x12);
    assert_eq!(gb.read8(0xFF04), 0);

    step_n(&mut gb, 63);
    assert_eq!(gb.read8(0xFF04), 0);
    step_n(&mut gb, 1);
    assert_eq!(gb.read8(0xFF04), 1);
    step_n(&mut gb, 64);
    assert_eq!(gb.read8(0xFF04), 2);
}

#[test]
fn div_write_from_code_takes_effect_in_the_same_step() {
    // LDH ($04),A
    let mut gb = boot(&[0xE0, 0x04]);
    assert_eq!(gb.read8(0xFF04), 0xAB);
    assert_eq!(gb.step(), 12);
    assert_eq!(gb.read8(0xFF04), 0);
}

#[test]
fn div_write_holds_off_the_next_tima_tick() {
    let mut gb = boot(&[]);
    gb.write8(0xFF07, 0x05);
    step_n(&mut gb, 3);
    gb.write8(0xFF04, 0xFF);
    step_n(&mut gb, 1);
    assert_eq!(gb.read8(0xFF05), 0);
    step_n(&mut gb, 3);
    assert_eq!(gb.read8(0xFF05), 1);
}

#[test]
fn lcd_modes_follow_the_line_cycle() {
    let mut gb = boot(&[]);
    restart_lcd(&mut gb);
    assert_eq!(stat_mode(&mut gb), 2);
    assert_eq!(gb.read8(0xFF44), 0);

    step_n(&mut gb, 19);
    assert_eq!(stat_mode(&mut gb), 2);
    step_n(&mut gb, 1);
    assert_eq!(stat_mode(&mut gb), 3);

    step_n(&mut gb, 43);
    assert_eq!(stat_mode(&mut gb), 0);

    step_n(&mut gb, 51);
    assert_eq!(gb.read8(0xFF44), 1);
    assert_eq!(stat_mode(&mut gb), 2);
}

#[test]
fn frame_completes_at_line_144_with_vblank_requested() {
    let mut gb = boot(&SPIN);
    restart_lcd(&mut gb);
    gb.write8(0xFF0F, 0x00);

    assert_eq!(gb.run_frame(), 144 * 456);
    assert!(gb.frame_complete());
    assert_eq!(gb.read8(0xFF44), 144);
    assert_eq!(stat_mode(&mut gb), 1);
    assert_eq!(gb.read8(0xFF0F) & 0x01, 0x01);
    assert_eq!(gb.frames(), 1);

    step_n(&mut gb, 100);
    assert!(gb.frame_complete());
    gb.clear_frame_complete();
    assert!(!gb.frame_complete());

    // The rest of the way to the next V-blank.
    assert_eq!(gb.run_frame(), CYCLES_PER_FRAME - 100 * 12);
    assert_eq!(gb.frames(), 2);
}

#[test]
fn lyc_match_sets_coincidence_and_requests_stat() {
    let mut gb = boot(&[]);
    gb.write8(0xFF45, 5);
    gb.write8(0xFF41, 0x40);
    restart_lcd(&mut gb);
    gb.write8(0xFF0F, 0x00);

    step_n(&mut gb, 4 * 114);
    assert_eq!(gb.read8(0xFF44), 4);
    assert_eq!(gb.read8(0xFF0F) & 0x02, 0);

    step_n(&mut gb, 114);
    assert_eq!(gb.read8(0xFF44), 5);
    assert_eq!(gb.read8(0xFF41) & 0x04, 0x04);
    assert_eq!(gb.read8(0xFF0F) & 0x02, 0x02);

    step_n(&mut gb, 114);
    assert_eq!(gb.read8(0xFF41) & 0x04, 0);
}

#[test]
fn hblank_and_oam_stat_sources() {
    let mut gb = boot(&[]);
    gb.write8(0xFF41, 0x08);
    restart_lcd(&mut gb);
    gb.write8(0xFF0F, 0x00);
    step_n(&mut gb, 62);
    assert_eq!(gb.read8(0xFF0F) & 0x02, 0);
    step_n(&mut gb, 1);
    assert_eq!(gb.read8(0xFF0F) & 0x02, 0x02);

    gb.write8(0xFF41, 0x20);
    gb.write8(0xFF0F, 0x00);
    step_n(&mut gb, 51);
    assert_eq!(gb.read8(0xFF44), 1);
    assert_eq!(gb.read8(0xFF0F) & 0x02, 0x02);
}

#[test]
fn lcd_off_freezes_ly_and_bounds_run_frame() {
    let mut gb = boot(&SPIN);
    step_n(&mut gb, 200);
    gb.write8(0xFF40, 0x11);
    assert!(!gb.lcd_enabled());
    assert_eq!(gb.read8(0xFF44), 0);
    assert_eq!(stat_mode(&mut gb), 0);

    assert_eq!(gb.run_frame(), CYCLES_PER_FRAME);
    assert!(!gb.frame_complete());
    assert_eq!(gb.read8(0xFF44), 0);
}

#[test]
fn timer_overflow_requests_and_dispatches_interrupt() {
    let mut gb = boot(&[]);
    gb.write8(0xFF06, 0x20);
    gb.write8(0xFF05, 0xFF);
    gb.write8(0xFF07, 0x05);
    gb.write8(0xFFFF, 0x04);
    gb.cpu.ime = true;

    step_n(&mut gb, 3);
    assert_eq!(gb.read8(0xFF0F) & 0x04, 0);
    step_n(&mut gb, 1);
    assert_eq!(gb.read8(0xFF0F) & 0x04, 0x04);
    assert_eq!(gb.read8(0xFF05), 0x20);

    gb.step();
    assert_eq!(gb.cpu.regs.pc, 0x0051);
    assert_eq!(gb.cpu.regs.sp, 0xFFFC);
    assert_eq!(gb.read8(0xFFFC), 0x54);
    assert_eq!(gb.read8(0xFFFD), 0x01);
    assert_eq!(gb.read8(0xFF0F) & 0x04, 0);
    assert!(!gb.cpu.ime);
}

#[test]
fn halt_wakes_on_vblank_without_ime() {
    // HALT; NOP; JR -2
    let mut gb = boot(&[0x76, 0x00, 0x18, 0xFE]);
    gb.write8(0xFFFF, 0x01);
    gb.write8(0xFF0F, 0x00);
    restart_lcd(&mut gb);

    gb.run_frame();
    assert!(gb.frame_complete());
    assert!(gb.cpu.halted);

    gb.step();
    assert!(!gb.cpu.halted);
    assert_eq!(gb.cpu.regs.pc, 0x0152);
}

#[test]
fn joypad_reads_the_selected_group() {
    let mut gb = boot(&[]);
    gb.write8(0xFF0F, 0x00);

    gb.set_button(JoypadButton::A, true);
    assert_eq!(gb.read8(0xFF0F) & 0x10, 0x10);

    gb.write8(0xFF00, 0x10);
    assert_eq!(gb.read8(0xFF00), 0xDE);
    gb.write8(0xFF00, 0x20);
    assert_eq!(gb.read8(0xFF00), 0xEF);

    gb.handle_key(Key::Right, true);
    assert_eq!(gb.read8(0xFF00), 0xEE);

    gb.handle_key(Key::Enter, true);
    gb.write8(0xFF00, 0x10);
    assert_eq!(gb.read8(0xFF00), 0xD6);

    gb.set_button(JoypadButton::A | JoypadButton::START, false);
    assert_eq!(gb.read8(0xFF00), 0xDF);
    gb.write8(0xFF00, 0x30);
    assert_eq!(gb.read8(0xFF00), 0xFF);
}

#[test]
fn dma_copies_160_bytes_into_oam() {
    let mut gb = boot(&[]);
    for i in 0..0xA0u16 {
        gb.write8(0xC100 + i, i as u8 ^ 0x5A);
    }
    gb.write8(0xFF46, 0xC1);
    for i in 0..0xA0u16 {
        assert_eq!(gb.read8(0xFE00 + i), i as u8 ^ 0x5A);
    }
    assert_eq!(gb.read8(0xFF46), 0xC1);
}

#[test]
fn frames_render_background_and_window() {
    let sink: Shared<(u8, [u8; 160])> = Rc::default();
    let options = LoadOptions::builder()
        .line_sink(Box::new(Recorder(sink.clone())))
        .build();
    let mut gb = boot_with(rom_with_program(&SPIN), options);

    // Tile 0: colour 1 everywhere. Tile 1: colour 0.
    for row in 0..8u16 {
        gb.write8(0x8000 + row * 2, 0xFF);
    }
    // Window map at $9C00 uses tile 1.
    for i in 0..0x400u16 {
        gb.write8(0x9C00 + i, 0x01);
    }
    gb.write8(0xFF4A, 0);
    gb.write8(0xFF4B, 87);
    gb.write8(0xFF40, 0x11);
    gb.write8(0xFF40, 0xF1);

    gb.run_frame();
    {
        let lines = sink.borrow();
        // The line after switching the LCD on is not drawn.
        assert_eq!(lines.len(), 143);
        assert_eq!(lines[0].0, 1);
        assert_eq!(lines[142].0, 143);
    }

    gb.run_frame();
    assert_eq!(sink.borrow().len(), 143 + 144);

    let fb = gb.framebuffer();
    for row in fb.chunks_exact(160) {
        assert!(row[..80].iter().all(|&p| p == 3));
        assert!(row[80..].iter().all(|&p| p == 0));
    }

    let mut rgb = vec![0x77u8; 160 * 144 * 3];
    gb.video_frame(&mut rgb);
    assert_eq!(&rgb[..3], &[0, 0, 0]);
    assert_eq!(&rgb[80 * 3..80 * 3 + 3], &[0xFF, 0xFF, 0xFF]);
}

#[test]
fn invalid_opcode_goes_to_the_error_handler() {
    let faults: Shared<(ErrorKind, u16)> = Rc::default();
    let options = LoadOptions::builder()
        .error_handler(Box::new(Recorder(faults.clone())))
        .build();
    let mut gb = boot_with(rom_with_program(&[0xD3]), options);

    assert_eq!(gb.step(), 4);
    assert_eq!(*faults.borrow(), vec![(ErrorKind::InvalidOpcode(0xD3), ENTRY)]);
    assert_eq!(gb.cpu.regs.pc, ENTRY + 1);
}

#[test]
fn trace_sink_sees_lcd_power_and_vblank() {
    let events: Shared<TraceEvent> = Rc::default();
    let options = LoadOptions::builder()
        .trace_sink(Box::new(Recorder(events.clone())))
        .build();
    let mut gb = boot_with(rom_with_program(&SPIN), options);

    restart_lcd(&mut gb);
    gb.run_frame();

    let events = events.borrow();
    let milestones: Vec<_> = events
        .iter()
        .filter(|e| !matches!(e, TraceEvent::Instruction { .. }))
        .copied()
        .collect();
    assert_eq!(
        milestones,
        vec![
            TraceEvent::LcdPower { enabled: false },
            TraceEvent::LcdPower { enabled: true },
            TraceEvent::VBlank { frame: 1 },
        ]
    );
    assert!(events.contains(&TraceEvent::Instruction { pc: ENTRY, opcode: 0x18 }));
}

#[test]
fn header_is_available_after_load() {
    let mut rom = rom_image(0x03, 0x01, 0x03);
    rom[0x134..0x139].copy_from_slice(b"HELLO");
    let gb = GameBoy::load(rom, LoadOptions::default()).unwrap();
    let header = gb.header();
    assert_eq!(header.title, "HELLO");
    assert_eq!(header.rom_banks, 4);
    assert_eq!(header.ram_banks, 4);
    assert!(header.has_battery);
}
