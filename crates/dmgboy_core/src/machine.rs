mod bus;
mod cartridge;
mod gameboy;
mod io;
mod loader;
mod ppu;
mod timer;
mod video;

pub(crate) use bus::GameBoyBus;
pub use bus::JoypadButton;
pub use cartridge::{CartridgeHeader, MbcKind, RomImage};
pub use gameboy::GameBoy;
pub use loader::{LoadError, LoadOptions};

/// T-cycles in one full LCD frame (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;

#[cfg(test)]
mod tests;
