use crate::platform::CartridgeMemory;

use super::RAM_BANK_SIZE;

/// Default cartridge storage: the ROM file in memory plus a zeroed RAM buffer.
#[derive(Clone, Debug, Default)]
pub struct RomImage {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomImage {
    pub fn new(rom: Vec<u8>, ram_banks: u8) -> Self {
        Self {
            rom,
            ram: vec![0; ram_banks as usize * RAM_BANK_SIZE as usize],
        }
    }
}

impl CartridgeMemory for RomImage {
    fn rom_read(&self, offset: u32) -> u8 {
        self.rom.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn ram_read(&self, offset: u32) -> u8 {
        self.ram.get(offset as usize).copied().unwrap_or(0xFF)
    }

    fn ram_write(&mut self, offset: u32, value: u8) {
        if let Some(slot) = self.ram.get_mut(offset as usize) {
            *slot = value;
        }
    }

    fn ram(&self) -> &[u8] {
        &self.ram
    }
}
