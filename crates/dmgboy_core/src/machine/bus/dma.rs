use super::super::io;
use super::{GameBoyBus, OAM_SIZE};

impl GameBoyBus {
    /// OAM DMA: copy `$XX00-$XX9F` into OAM through the normal read path.
    ///
    /// The copy completes before the writing instruction does and costs no
    /// extra cycles.
    pub(super) fn oam_dma(&mut self, value: u8) {
        let base = (value as u16) << 8;
        for i in 0..OAM_SIZE {
            self.oam[i] = self.read8_mmio(base.wrapping_add(i as u16));
        }
        self.io[io::DMA] = value;
    }
}
