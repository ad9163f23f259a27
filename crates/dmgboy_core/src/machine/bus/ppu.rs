use super::super::io;
use super::super::ppu::{Lcdc, Mode};
use super::GameBoyBus;

mod mmio;
mod timing;

impl GameBoyBus {
    #[inline]
    pub(in crate::machine) fn lcdc(&self) -> Lcdc {
        Lcdc::from_bits_retain(self.io[io::LCDC])
    }

    #[inline]
    fn mode(&self) -> Mode {
        Mode::from_stat(self.io[io::STAT])
    }

    /// STAT bits 0-1 are only ever changed from here.
    #[inline]
    fn set_mode(&mut self, mode: Mode) {
        self.io[io::STAT] = (self.io[io::STAT] & !0x03) | mode as u8;
    }
}
