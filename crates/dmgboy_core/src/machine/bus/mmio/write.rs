use super::super::super::io;
use super::super::GameBoyBus;

impl GameBoyBus {
    pub(in super::super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            // Writes to ROM space are bank-controller commands.
            0x0000..=0x7FFF => self.mbc.write_control(addr, value),

            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,

            0xA000..=0xBFFF => {
                if let Some(offset) = self.mbc.ram_offset(addr) {
                    self.cart.ram_write(offset, value);
                }
            }

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = value,

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,

            0xFEA0..=0xFEFF => {}

            0xFF00..=0xFFFF => self.write_io((addr & 0xFF) as usize, value),
        }
    }

    fn write_io(&mut self, reg: usize, value: u8) {
        match reg {
            io::JOYP => self.write_joyp(value),

            io::DIV => self.timer.write_div(),
            io::TIMA => self.timer.write_tima(value),
            io::TMA => self.timer.write_tma(value),
            io::TAC => self.timer.write_tac(value),

            // Bits 5-7 of IF always read back as 1.
            io::IF => self.io[io::IF] = value | 0xE0,

            io::LCDC => self.write_lcdc(value),
            io::STAT => self.write_stat(value),
            io::LY => {}
            io::DMA => self.oam_dma(value),

            io::BGP => {
                self.io[reg] = value;
                self.ppu.set_bg_palette(value);
            }
            io::OBP0 => {
                self.io[reg] = value;
                self.ppu.set_sprite_palette(0, value);
            }
            io::OBP1 => {
                self.io[reg] = value;
                self.ppu.set_sprite_palette(1, value);
            }

            _ => self.io[reg] = value,
        }
    }
}
