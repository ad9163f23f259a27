//! Offsets of the I/O registers inside the 256-byte `$FF00` page.

pub(super) const JOYP: usize = 0x00;
pub(super) const DIV: usize = 0x04;
pub(super) const TIMA: usize = 0x05;
pub(super) const TMA: usize = 0x06;
pub(super) const TAC: usize = 0x07;
pub(super) const IF: usize = 0x0F;
pub(super) const LCDC: usize = 0x40;
pub(super) const STAT: usize = 0x41;
pub(super) const SCY: usize = 0x42;
pub(super) const SCX: usize = 0x43;
pub(super) const LY: usize = 0x44;
pub(super) const LYC: usize = 0x45;
pub(super) const DMA: usize = 0x46;
pub(super) const BGP: usize = 0x47;
pub(super) const OBP0: usize = 0x48;
pub(super) const OBP1: usize = 0x49;
pub(super) const WY: usize = 0x4A;
pub(super) const WX: usize = 0x4B;
pub(super) const IE: usize = 0xFF;
