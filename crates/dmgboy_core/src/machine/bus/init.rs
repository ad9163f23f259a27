use super::super::io;
use super::GameBoyBus;

impl GameBoyBus {
    /// I/O registers as the boot ROM leaves them on a DMG.
    ///
    /// DIV (0xAB) is owned by the timer. Registers not listed here power on
    /// as zero.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        self.io[io::JOYP] = 0xCF;
        self.io[io::IF] = 0xE1;
        self.io[io::LCDC] = 0x91;
        self.io[io::STAT] = 0x85;
        self.io[io::BGP] = 0xFC;
        self.io[io::OBP0] = 0xFF;
        self.io[io::OBP1] = 0xFF;

        self.ppu.set_bg_palette(0xFC);
        self.ppu.set_sprite_palette(0, 0xFF);
        self.ppu.set_sprite_palette(1, 0xFF);
        self.ppu.window_y = self.io[io::WY];
    }
}
