use crate::machine::LoadError;

/// First byte past the cartridge header.
pub(in crate::machine) const HEADER_END: usize = 0x150;

const LOGO_START: usize = 0x104;
const TITLE: std::ops::Range<usize> = 0x134..0x144;
const CARTRIDGE_TYPE: usize = 0x147;
const ROM_SIZE: usize = 0x148;
const RAM_SIZE: usize = 0x149;

/// The boot ROM refuses to start a cartridge whose header does not carry
/// this bitmap byte for byte.
const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MbcKind {
    /// 32 KiB of ROM wired straight to the bus.
    None,
    Mbc1,
}

/// What the loader learned from `$0100-$014F`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub mbc: MbcKind,
    /// External RAM is wired up (types 02, 03, 08, 09 with a non-zero size).
    pub has_ram: bool,
    pub has_battery: bool,
    pub rom_banks: u16,
    pub ram_banks: u8,
}

impl CartridgeHeader {
    /// Validate and decode the header at the start of `rom`.
    pub fn parse(rom: &[u8]) -> Result<Self, LoadError> {
        if rom.len() < HEADER_END {
            return Err(LoadError::TooSmall { len: rom.len() });
        }
        if rom[LOGO_START..LOGO_START + NINTENDO_LOGO.len()] != NINTENDO_LOGO {
            return Err(LoadError::LogoMismatch);
        }

        let cartridge_type = rom[CARTRIDGE_TYPE];
        let (mbc, ram_wired, has_battery) = match cartridge_type {
            0x00 => (MbcKind::None, false, false),
            0x01 => (MbcKind::Mbc1, false, false),
            0x02 => (MbcKind::Mbc1, true, false),
            0x03 => (MbcKind::Mbc1, true, true),
            0x08 => (MbcKind::None, true, false),
            0x09 => (MbcKind::None, true, true),
            other => return Err(LoadError::UnsupportedCartridgeType(other)),
        };
        let rom_banks = rom_banks(rom[ROM_SIZE])?;
        let ram_banks = ram_banks(rom[RAM_SIZE])?;

        let title = rom[TITLE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect::<String>()
            .trim_end()
            .to_string();

        Ok(Self {
            title,
            cartridge_type,
            mbc,
            has_ram: ram_wired && ram_banks > 0,
            has_battery,
            rom_banks,
            ram_banks,
        })
    }

    /// Bytes of ROM the header promises.
    pub fn rom_size(&self) -> usize {
        self.rom_banks as usize * super::ROM_BANK_SIZE as usize
    }
}

/// ROM size code to bank count, counting bank 0.
fn rom_banks(code: u8) -> Result<u16, LoadError> {
    match code {
        0x00..=0x06 => Ok(2 << code),
        0x52 => Ok(72),
        0x53 => Ok(80),
        0x54 => Ok(96),
        other => Err(LoadError::UnsupportedRomSize(other)),
    }
}

/// RAM size code to 8 KiB bank count. A 2 KiB part still occupies one bank.
fn ram_banks(code: u8) -> Result<u8, LoadError> {
    match code {
        0x00 => Ok(0),
        0x01 | 0x02 => Ok(1),
        0x03 => Ok(4),
        0x04 => Ok(16),
        0x05 => Ok(8),
        other => Err(LoadError::UnsupportedRamSize(other)),
    }
}

#[cfg(test)]
pub(in crate::machine) fn write_logo(rom: &mut [u8]) {
    rom[LOGO_START..LOGO_START + NINTENDO_LOGO.len()].copy_from_slice(&NINTENDO_LOGO);
}
