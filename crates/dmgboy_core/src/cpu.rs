//! Sharp LR35902 instruction-level CPU core.

mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod timing;

pub use bus::Bus;
pub use regs::{Flag, Registers};
pub use timing::{CB_CYCLES, OP_CYCLES};

/// CPU state: register file plus the control latches that survive between
/// instructions.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    /// Set by HALT and STOP; cleared when any enabled interrupt is pending.
    pub halted: bool,
    /// EI was executed; IME turns on once the next instruction completes.
    ime_enable_pending: bool,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    /// Clear Z, N, H and C in one go.
    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }
}
