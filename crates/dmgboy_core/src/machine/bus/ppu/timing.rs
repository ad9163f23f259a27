use crate::interrupt::InterruptFlags;
use crate::platform::TraceEvent;

use super::super::super::io;
use super::super::super::ppu::{
    Lcdc, LineRegs, Mode, Stat, LINES_PER_FRAME, LINE_CYCLES, OAM_SCAN_END, TRANSFER_END,
    VBLANK_LINE,
};
use super::super::GameBoyBus;

impl GameBoyBus {
    /// Advance the LCD by `cycles` T-cycles.
    ///
    /// Every threshold crossed is processed in order, so one long
    /// instruction can move through several modes. Nothing happens while
    /// LCDC.7 is clear.
    pub(in super::super) fn advance_lcd(&mut self, cycles: u32) {
        if !self.lcdc().contains(Lcdc::LCD_ENABLE) {
            return;
        }

        self.ppu.line_cycles += cycles;
        loop {
            let count = self.ppu.line_cycles;
            match self.mode() {
                Mode::OamScan if count >= OAM_SCAN_END => self.set_mode(Mode::Transfer),
                Mode::Transfer if count >= TRANSFER_END => self.enter_hblank(),
                Mode::HBlank | Mode::VBlank if count >= LINE_CYCLES => self.next_line(),
                _ => break,
            }
        }
    }

    fn stat(&self) -> Stat {
        Stat::from_bits_truncate(self.io[io::STAT])
    }

    fn enter_hblank(&mut self) {
        self.set_mode(Mode::HBlank);
        if self.stat().contains(Stat::HBLANK_IRQ) {
            self.request_interrupt(InterruptFlags::LCD_STAT);
        }

        if self.ppu.lcd_blank {
            self.ppu.lcd_blank = false;
        } else {
            self.draw_current_line();
        }
    }

    fn draw_current_line(&mut self) {
        let regs = LineRegs {
            lcdc: self.lcdc(),
            scy: self.io[io::SCY],
            scx: self.io[io::SCX],
            ly: self.io[io::LY],
            wx: self.io[io::WX],
        };
        let line = self.ppu.render_line(regs, &self.vram, &self.oam);
        if let Some(sink) = self.line_sink.as_mut() {
            sink.draw_line(&line, regs.ly);
        }
    }

    fn next_line(&mut self) {
        self.ppu.line_cycles -= LINE_CYCLES;
        let ly = (self.io[io::LY] + 1) % LINES_PER_FRAME;
        self.io[io::LY] = ly;
        self.update_coincidence();

        if ly == VBLANK_LINE {
            self.set_mode(Mode::VBlank);
            self.ppu.frame_complete = true;
            self.ppu.frames += 1;
            self.request_interrupt(InterruptFlags::VBLANK);
            if self.stat().contains(Stat::VBLANK_IRQ) {
                self.request_interrupt(InterruptFlags::LCD_STAT);
            }
            let frame = self.ppu.frames;
            self.emit(TraceEvent::VBlank { frame });
        } else if ly < VBLANK_LINE {
            self.set_mode(Mode::OamScan);
            if self.stat().contains(Stat::OAM_IRQ) {
                self.request_interrupt(InterruptFlags::LCD_STAT);
            }
        }

        if ly == 0 {
            self.ppu.window_line = 0;
            self.ppu.window_y = self.io[io::WY];
        }
    }

    fn update_coincidence(&mut self) {
        if self.io[io::LY] == self.io[io::LYC] {
            self.io[io::STAT] |= Stat::COINCIDENCE.bits();
            if self.stat().contains(Stat::LYC_IRQ) {
                self.request_interrupt(InterruptFlags::LCD_STAT);
            }
        } else {
            self.io[io::STAT] &= !Stat::COINCIDENCE.bits();
        }
    }
}
