use dmgboy_common::key::Key;

use crate::cpu::{Bus, Cpu};

use super::cartridge::CartridgeHeader;
use super::ppu::Lcdc;
use super::{video, GameBoyBus, JoypadButton, CYCLES_PER_FRAME};

/// A loaded DMG: CPU plus the bus that owns everything else.
///
/// Built by [`GameBoy::load`] and friends; there is no way to get a machine
/// without a validated cartridge.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    pub(super) header: CartridgeHeader,
}

impl GameBoy {
    /// Run one CPU step (interrupt check plus one instruction) and advance
    /// the timer and LCD to match. Returns the T-cycles consumed.
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.bus)
    }

    /// Step until the LCD reaches V-blank.
    ///
    /// With the LCD off no V-blank ever comes, so the loop gives up after
    /// one frame's worth of cycles. Returns the cycles consumed.
    pub fn run_frame(&mut self) -> u32 {
        self.clear_frame_complete();
        let mut cycles = 0u32;
        while !self.frame_complete() {
            cycles += self.step();
            if cycles >= CYCLES_PER_FRAME && !self.lcd_enabled() {
                break;
            }
        }
        cycles
    }

    /// Set when LY reaches 144; stays set until cleared.
    pub fn frame_complete(&self) -> bool {
        self.bus.ppu.frame_complete
    }

    pub fn clear_frame_complete(&mut self) {
        self.bus.ppu.frame_complete = false;
    }

    /// V-blanks reached since power-on.
    pub fn frames(&self) -> u64 {
        self.bus.ppu.frames
    }

    pub fn lcd_enabled(&self) -> bool {
        self.bus.lcdc().contains(Lcdc::LCD_ENABLE)
    }

    pub fn set_button(&mut self, button: JoypadButton, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    /// Map a frontend key onto the joypad:
    /// arrows => D-pad, Z => A, X => B, Enter => Start, Backspace => Select.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let button = match key {
            Key::Right => JoypadButton::RIGHT,
            Key::Left => JoypadButton::LEFT,
            Key::Up => JoypadButton::UP,
            Key::Down => JoypadButton::DOWN,
            Key::Z => JoypadButton::A,
            Key::X => JoypadButton::B,
            Key::Enter => JoypadButton::START,
            Key::Backspace => JoypadButton::SELECT,
            Key::Escape | Key::None => return,
        };
        self.set_button(button, pressed);
    }

    /// The last rendered frame as shade indices (0-3), 160x144 row-major.
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    /// Convert the framebuffer to RGB24 in `buffer` (3 bytes per pixel).
    pub fn video_frame(&self, buffer: &mut [u8]) {
        video::render_rgb24(self.framebuffer(), buffer);
    }

    /// Cartridge RAM, for writing a battery save.
    pub fn cart_ram(&self) -> &[u8] {
        self.bus.cart_ram()
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// Read through the memory map exactly as the CPU would.
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Write through the memory map, side effects included.
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }
}
