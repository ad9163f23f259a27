use std::path::Path;

use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::cpu::Cpu;
use crate::platform::{CartridgeMemory, ErrorHandler, LineSink, LogErrorHandler, TraceSink};

use super::cartridge::{BankController, CartridgeHeader, RomImage};
use super::{GameBoy, GameBoyBus};

/// Why a ROM could not be turned into a running machine.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ROM file: {0}")]
    Io(#[from] std::io::Error),
    #[error("image is {len} bytes, too small to hold a cartridge header")]
    TooSmall { len: usize },
    #[error("Nintendo logo in the cartridge header does not match")]
    LogoMismatch,
    #[error("unsupported cartridge type 0x{0:02X}")]
    UnsupportedCartridgeType(u8),
    #[error("unsupported ROM size code 0x{0:02X}")]
    UnsupportedRomSize(u8),
    #[error("unsupported RAM size code 0x{0:02X}")]
    UnsupportedRamSize(u8),
    #[error("image is {actual} bytes but the header declares {expected}")]
    Truncated { expected: usize, actual: usize },
}

/// Collaborators and initial state injected at load time.
///
/// Every field is optional; `LoadOptions::default()` gives a machine that
/// logs faults, draws only into its own framebuffer and starts with zeroed
/// cartridge RAM.
#[derive(Default, TypedBuilder)]
pub struct LoadOptions {
    /// Receives every rendered scanline.
    #[builder(default, setter(strip_option))]
    pub line_sink: Option<Box<dyn LineSink>>,
    /// Replaces [`LogErrorHandler`].
    #[builder(default, setter(strip_option))]
    pub error_handler: Option<Box<dyn ErrorHandler>>,
    #[builder(default, setter(strip_option))]
    pub trace_sink: Option<Box<dyn TraceSink>>,
    /// Battery save to seed cartridge RAM with.
    #[builder(default, setter(strip_option))]
    pub save_data: Option<Vec<u8>>,
}

impl GameBoy {
    /// Validate `rom` and build a machine in its post-boot state.
    pub fn load(rom: Vec<u8>, options: LoadOptions) -> Result<Self, LoadError> {
        let header = CartridgeHeader::parse(&rom)?;
        if rom.len() < header.rom_size() {
            return Err(LoadError::Truncated {
                expected: header.rom_size(),
                actual: rom.len(),
            });
        }

        log::info!(
            "GB cartridge: title={:?} type=0x{:02X} mbc={:?} rom_banks={} ram_banks={} battery={}",
            header.title,
            header.cartridge_type,
            header.mbc,
            header.rom_banks,
            header.ram_banks,
            header.has_battery,
        );

        let ram_banks = if header.has_ram { header.ram_banks } else { 0 };
        let image = RomImage::new(rom, ram_banks);
        Ok(Self::with_cartridge(header, Box::new(image), options))
    }

    pub fn load_file(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, LoadError> {
        let rom = std::fs::read(path)?;
        Self::load(rom, options)
    }

    /// Build a machine around caller-supplied cartridge storage.
    ///
    /// `header` must describe `cart`; it drives the bank arithmetic.
    pub fn with_cartridge(
        header: CartridgeHeader,
        mut cart: Box<dyn CartridgeMemory>,
        options: LoadOptions,
    ) -> Self {
        let LoadOptions {
            line_sink,
            error_handler,
            trace_sink,
            save_data,
        } = options;

        if let Some(save) = save_data {
            let len = save.len().min(cart.ram().len());
            for (offset, &byte) in save[..len].iter().enumerate() {
                cart.ram_write(offset as u32, byte);
            }
        }

        let mbc = BankController::new(&header);
        let error_handler = error_handler.unwrap_or_else(|| Box::new(LogErrorHandler));
        let mut bus = GameBoyBus::new(cart, mbc, error_handler);
        bus.line_sink = line_sink;
        bus.trace_sink = trace_sink;

        Self {
            cpu: Cpu::new(),
            bus,
            header,
        }
    }
}
