use super::super::super::io;
use super::super::GameBoyBus;

impl GameBoyBus {
    pub(in super::super) fn read8_mmio(&self, addr: u16) -> u8 {
        match addr {
            // Bank 0 and the switchable bank both go through the controller.
            0x0000..=0x7FFF => self.cart.rom_read(self.mbc.rom_offset(addr)),

            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],

            0xA000..=0xBFFF => match self.mbc.ram_offset(addr) {
                Some(offset) => self.cart.ram_read(offset),
                None => 0xFF,
            },

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],

            // Echo RAM mirrors the first 7.5 KiB of WRAM.
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],

            0xFEA0..=0xFEFF => 0xFF,

            0xFF00..=0xFFFF => self.read_io((addr & 0xFF) as usize),
        }
    }

    fn read_io(&self, reg: usize) -> u8 {
        match reg {
            io::JOYP => self.read_joyp(),
            io::DIV => self.timer.read_div(),
            io::TIMA => self.timer.read_tima(),
            io::TMA => self.timer.read_tma(),
            io::TAC => self.timer.read_tac(),
            _ => self.io[reg],
        }
    }
}
