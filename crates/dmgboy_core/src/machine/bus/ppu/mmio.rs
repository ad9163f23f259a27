use crate::platform::TraceEvent;

use super::super::super::io;
use super::super::super::ppu::{Lcdc, Mode};
use super::super::GameBoyBus;

impl GameBoyBus {
    pub(in super::super) fn write_lcdc(&mut self, value: u8) {
        let was_enabled = self.lcdc().contains(Lcdc::LCD_ENABLE);
        self.io[io::LCDC] = value;
        let now_enabled = self.lcdc().contains(Lcdc::LCD_ENABLE);

        if was_enabled == now_enabled {
            return;
        }

        if now_enabled {
            // Restart from the top of the frame; the first line after
            // power-up is not drawn.
            self.ppu.lcd_blank = true;
            self.ppu.window_line = 0;
            self.ppu.window_y = self.io[io::WY];
            self.set_mode(Mode::OamScan);
        } else {
            self.set_mode(Mode::HBlank);
        }
        self.io[io::LY] = 0;
        self.ppu.line_cycles = 0;

        log::debug!("GB LCD {}", if now_enabled { "on" } else { "off" });
        self.emit(TraceEvent::LcdPower { enabled: now_enabled });
    }

    /// Bits 3-6 are writable; mode and coincidence stay with the LCD state
    /// machine, bit 7 reads as 1.
    pub(in super::super) fn write_stat(&mut self, value: u8) {
        self.io[io::STAT] = (value & 0x78) | (self.io[io::STAT] & 0x07) | 0x80;
    }
}
