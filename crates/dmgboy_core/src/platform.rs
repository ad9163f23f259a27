//! Interfaces the core calls out to.
//!
//! The machine owns one boxed implementation of each trait. Frontends supply
//! their own through [`LoadOptions`](crate::LoadOptions); every trait except
//! [`CartridgeMemory`] has a usable default.

use crate::SCREEN_WIDTH;

/// Backing storage for the cartridge: ROM image plus optional external RAM.
///
/// The memory bus performs all bank arithmetic and only hands over absolute
/// offsets. RAM accessors are only called while RAM is present and enabled.
pub trait CartridgeMemory {
    /// Byte at `offset` into the full ROM image, 0xFF past the end.
    fn rom_read(&self, offset: u32) -> u8;
    fn ram_read(&self, offset: u32) -> u8;
    fn ram_write(&mut self, offset: u32, value: u8);
    /// Current external RAM contents, for battery saves.
    fn ram(&self) -> &[u8];
}

/// Receives each finished scanline as palette-mapped shade indices (0-3).
pub trait LineSink {
    fn draw_line(&mut self, pixels: &[u8; SCREEN_WIDTH], ly: u8);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// One of the eleven unassigned opcodes (D3, DB, DD, E3, E4, EB, EC, ED,
    /// F4, FC, FD) was fetched.
    InvalidOpcode(u8),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidOpcode(op) => write!(f, "invalid opcode 0x{op:02X}"),
        }
    }
}

/// Decides what happens after a runtime instruction fault.
///
/// If the handler returns, the faulting instruction has been executed as a
/// no-op and stepping may continue.
pub trait ErrorHandler {
    fn handle_error(&mut self, kind: ErrorKind, addr: u16);
}

/// Default handler: log and carry on.
#[derive(Debug, Default)]
pub struct LogErrorHandler;

impl ErrorHandler for LogErrorHandler {
    fn handle_error(&mut self, kind: ErrorKind, addr: u16) {
        log::error!("GB CPU fault: {kind} at PC=0x{addr:04X}");
    }
}

/// Structured events for optional observability of the hot paths.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    /// About to execute `opcode`, fetched from `pc`.
    Instruction { pc: u16, opcode: u8 },
    /// Control transferred to `vector`; `return_pc` was pushed.
    Interrupt { vector: u16, return_pc: u16 },
    /// HALT (or STOP) entered at `pc`.
    Halt { pc: u16 },
    /// LCDC bit 7 toggled.
    LcdPower { enabled: bool },
    /// LY reached 144.
    VBlank { frame: u64 },
}

pub trait TraceSink {
    fn trace(&mut self, event: TraceEvent);
}
