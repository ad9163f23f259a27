mod header;
mod image;
mod mbc1;

pub(super) use header::HEADER_END;
#[cfg(test)]
pub(super) use header::write_logo;
pub use header::{CartridgeHeader, MbcKind};
pub use image::RomImage;
pub(super) use mbc1::BankController;

/// Size of one switchable ROM bank.
pub(super) const ROM_BANK_SIZE: u32 = 0x4000;
/// Size of one external RAM bank.
pub(super) const RAM_BANK_SIZE: u32 = 0x2000;
