use std::io;
use std::path::{Path, PathBuf};

use crate::{GameBoy, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};
use dmgboy_common::app::App;
use dmgboy_common::key::Key;

/// Frames with the LCD switched off before we say something about it.
const LCD_OFF_WARN_FRAMES: u32 = 120;

/// SDL-facing wrapper: one `update` runs one DMG frame.
pub struct GameBoyApp {
    pub gb: GameBoy,
    should_exit: bool,
    scale: u32,
    frame_counter: u64,
    lcd_off_frames: u32,
    /// Where cartridge RAM is written on exit, for battery-backed carts.
    save_path: Option<PathBuf>,
}

impl GameBoyApp {
    pub fn new(gb: GameBoy) -> Self {
        Self {
            gb,
            should_exit: false,
            scale: SCREEN_SCALE,
            frame_counter: 0,
            lcd_off_frames: 0,
            save_path: None,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Write cartridge RAM to `path` on exit. Ignored for carts without a
    /// battery.
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        if self.gb.header().has_battery {
            self.save_path = Some(path);
        }
        self
    }

    fn write_save(&self) {
        let Some(path) = &self.save_path else {
            return;
        };
        match std::fs::write(path, self.gb.cart_ram()) {
            Ok(()) => log::info!("GB save written to '{}'", path.display()),
            Err(err) => log::warn!("GB save to '{}' failed: {err}", path.display()),
        }
    }
}

/// Read a battery save. A missing file is `Ok(None)`; any other failure is
/// returned so that an unreadable save is never replaced on exit.
pub fn read_save(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init: '{}'", self.gb.header().title);
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.gb.run_frame();
        self.gb.video_frame(screen_state);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        if self.gb.lcd_enabled() {
            self.lcd_off_frames = 0;
        } else {
            self.lcd_off_frames = self.lcd_off_frames.saturating_add(1);
        }

        if self.frame_counter % 600 == 0 {
            let regs = &self.gb.cpu.regs;
            log::debug!(
                "GB: frame={} vblanks={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} ime={} halted={}",
                self.frame_counter,
                self.gb.frames(),
                regs.pc,
                regs.sp,
                regs.af(),
                self.gb.cpu.ime,
                self.gb.cpu.halted,
            );
        }

        if self.lcd_off_frames == LCD_OFF_WARN_FRAMES {
            log::warn!(
                "GB: LCD still disabled after {} frames (pc=0x{:04X}); screen shows the last frame",
                LCD_OFF_WARN_FRAMES,
                self.gb.cpu.regs.pc,
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        log::debug!("GB key event: {:?} pressed={}", key, is_pressed);
        if key == Key::Escape {
            self.should_exit = true;
            return;
        }
        self.gb.handle_key(key, is_pressed);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        self.write_save();
        log::info!("Game Boy exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        format!("dmgboy - {}", self.gb.header().title)
    }
}
