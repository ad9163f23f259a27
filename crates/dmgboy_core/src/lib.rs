pub mod app;
pub mod cpu;
pub mod interrupt;
pub mod machine;
pub mod platform;

pub use app::{read_save, GameBoyApp};
pub use machine::{
    CartridgeHeader, GameBoy, JoypadButton, LoadError, LoadOptions, MbcKind, RomImage,
};
pub use platform::{CartridgeMemory, ErrorHandler, ErrorKind, LineSink, TraceEvent, TraceSink};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 4;
