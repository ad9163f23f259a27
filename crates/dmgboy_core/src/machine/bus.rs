use crate::interrupt::InterruptFlags;
use crate::platform::{CartridgeMemory, ErrorHandler, LineSink, TraceEvent, TraceSink};

use super::{cartridge::BankController, io, ppu::Ppu, timer::Timer};

mod dma;
mod init;
mod joypad;
mod mmio;
mod ppu;
mod traits;

pub use joypad::JoypadButton;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
/// $FF00-$FFFF: I/O registers, HRAM and IE in one array.
const IO_SIZE: usize = 0x100;

/// The memory bus and everything hanging off it.
///
/// Owns the cartridge collaborator and its bank controller, the internal
/// memories, the display and timer state, and the optional observers. The
/// CPU only ever sees this through the [`Bus`](crate::cpu::Bus) trait.
pub(crate) struct GameBoyBus {
    cart: Box<dyn CartridgeMemory>,
    mbc: BankController,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    pub(super) ppu: Ppu,
    timer: Timer,
    /// Active-low button state: bits 0-3 A/B/Select/Start, bits 4-7
    /// Right/Left/Up/Down.
    joypad: u8,
    pub(super) line_sink: Option<Box<dyn LineSink>>,
    error_handler: Box<dyn ErrorHandler>,
    pub(super) trace_sink: Option<Box<dyn TraceSink>>,
}

impl GameBoyBus {
    pub(super) fn new(
        cart: Box<dyn CartridgeMemory>,
        mbc: BankController,
        error_handler: Box<dyn ErrorHandler>,
    ) -> Self {
        let mut bus = Self {
            cart,
            mbc,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            ppu: Ppu::new(),
            timer: Timer::new(),
            joypad: 0xFF,
            line_sink: None,
            error_handler,
            trace_sink: None,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }

    pub(super) fn cart_ram(&self) -> &[u8] {
        self.cart.ram()
    }

    fn request_interrupt(&mut self, irq: InterruptFlags) {
        self.io[io::IF] |= irq.bits();
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace_sink.as_mut() {
            sink.trace(event);
        }
    }
}
