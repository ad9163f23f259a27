use super::{CartridgeHeader, MbcKind, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// Bank-selection registers and the address arithmetic built on them.
///
/// The controller never touches cartridge storage; it turns CPU addresses in
/// `$4000-$7FFF` and `$A000-$BFFF` into absolute ROM/RAM offsets that the bus
/// hands to the [`CartridgeMemory`](crate::CartridgeMemory) implementation.
#[derive(Clone, Debug)]
pub(in crate::machine) struct BankController {
    kind: MbcKind,
    /// Selected ROM bank: low 5 bits from `$2000`, bits 5-6 from `$4000`.
    rom_bank: u16,
    /// `num_rom_banks - 1`; every bank number is masked with it.
    rom_mask: u16,
    ram_bank: u8,
    num_ram_banks: u8,
    has_ram: bool,
    ram_enabled: bool,
    /// `$6000` bit 0.
    mode_select: bool,
}

impl BankController {
    pub(in crate::machine) fn new(header: &CartridgeHeader) -> Self {
        Self {
            kind: header.mbc,
            rom_bank: 1,
            rom_mask: header.rom_banks.saturating_sub(1),
            ram_bank: 0,
            num_ram_banks: header.ram_banks,
            has_ram: header.has_ram,
            // Without a controller there is nothing to unlock the RAM.
            ram_enabled: header.mbc == MbcKind::None,
            mode_select: false,
        }
    }

    /// A CPU write into `$0000-$7FFF`. Ignored on carts without a controller.
    pub(in crate::machine) fn write_control(&mut self, addr: u16, value: u8) {
        if self.kind != MbcKind::Mbc1 {
            return;
        }
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                let mut bank = (value as u16 & 0x1F) | (self.rom_bank & 0x60);
                if bank & 0x1F == 0 {
                    bank += 1;
                }
                self.rom_bank = bank & self.rom_mask;
            }
            0x4000..=0x5FFF => {
                self.ram_bank = value & 0x03;
                self.rom_bank = (((value as u16 & 0x03) << 5) | (self.rom_bank & 0x1F)) & self.rom_mask;
            }
            _ => self.mode_select = value & 0x01 != 0,
        }
    }

    /// Absolute ROM offset for a CPU read in `$0000-$7FFF`.
    pub(in crate::machine) fn rom_offset(&self, addr: u16) -> u32 {
        if addr < 0x4000 {
            return addr as u32;
        }
        let bank = if self.kind == MbcKind::Mbc1 && self.mode_select {
            self.rom_bank & 0x1F
        } else {
            self.rom_bank
        };
        (addr as u32 - 0x4000) + bank as u32 * ROM_BANK_SIZE
    }

    /// Absolute RAM offset for a CPU access in `$A000-$BFFF`, or `None` when
    /// the access must be ignored (no RAM, or RAM locked).
    pub(in crate::machine) fn ram_offset(&self, addr: u16) -> Option<u32> {
        if !self.has_ram || !self.ram_enabled {
            return None;
        }
        let mut offset = addr as u32 - 0xA000;
        if self.kind == MbcKind::Mbc1 && self.mode_select && self.ram_bank < self.num_ram_banks {
            offset += self.ram_bank as u32 * RAM_BANK_SIZE;
        }
        Some(offset)
    }

    #[cfg(test)]
    fn rom_bank(&self) -> u16 {
        self.rom_bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(mbc: MbcKind, rom_banks: u16, ram_banks: u8) -> BankController {
        BankController::new(&CartridgeHeader {
            title: String::new(),
            cartridge_type: 0,
            mbc,
            has_ram: ram_banks > 0,
            has_battery: false,
            rom_banks,
            ram_banks,
        })
    }

    #[test]
    fn bank_zero_selects_bank_one() {
        let mut mbc = controller(MbcKind::Mbc1, 32, 0);
        mbc.write_control(0x2000, 0x00);
        assert_eq!(mbc.rom_bank(), 1);
        assert_eq!(mbc.rom_offset(0x4000), 0x4000);
    }

    #[test]
    fn bank_number_is_masked_to_rom_size() {
        let mut mbc = controller(MbcKind::Mbc1, 4, 0);
        mbc.write_control(0x2000, 0x07);
        assert_eq!(mbc.rom_bank(), 3);
        mbc.write_control(0x2000, 0x04);
        assert_eq!(mbc.rom_bank(), 0);
        assert_eq!(mbc.rom_offset(0x4123), 0x0123);
    }

    #[test]
    fn upper_bits_extend_the_bank_in_rom_mode() {
        let mut mbc = controller(MbcKind::Mbc1, 128, 0);
        mbc.write_control(0x2000, 0x05);
        mbc.write_control(0x4000, 0x02);
        assert_eq!(mbc.rom_bank(), 0x45);
        assert_eq!(mbc.rom_offset(0x4000), 0x45 * 0x4000);

        // Mode 1 drops the upper bits from ROM addressing.
        mbc.write_control(0x6000, 0x01);
        assert_eq!(mbc.rom_offset(0x4000), 0x05 * 0x4000);
    }

    #[test]
    fn ram_needs_enable_and_banks_only_in_mode_one() {
        let mut mbc = controller(MbcKind::Mbc1, 4, 4);
        assert_eq!(mbc.ram_offset(0xA000), None);

        mbc.write_control(0x0000, 0x0A);
        mbc.write_control(0x4000, 0x02);
        assert_eq!(mbc.ram_offset(0xA010), Some(0x10));

        mbc.write_control(0x6000, 0x01);
        assert_eq!(mbc.ram_offset(0xA010), Some(2 * 0x2000 + 0x10));

        mbc.write_control(0x0000, 0x00);
        assert_eq!(mbc.ram_offset(0xA010), None);
    }

    #[test]
    fn plain_rom_ignores_control_writes() {
        let mut mbc = controller(MbcKind::None, 2, 1);
        mbc.write_control(0x2000, 0x00);
        mbc.write_control(0x0000, 0x00);
        assert_eq!(mbc.rom_offset(0x7FFF), 0x7FFF);
        assert_eq!(mbc.ram_offset(0xBFFF), Some(0x1FFF));
    }
}
