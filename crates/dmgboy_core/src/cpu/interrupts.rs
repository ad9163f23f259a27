use super::{Bus, Cpu};
use crate::interrupt::InterruptFlags;
use crate::platform::TraceEvent;

/// Address of the interrupt flag register.
pub(super) const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt enable register.
pub(super) const IE_ADDR: u16 = 0xFFFF;

/// Cost charged for pushing PC and jumping to the vector.
pub(super) const DISPATCH_CYCLES: u32 = 20;

impl Cpu {
    /// Interrupts that are both requested and enabled.
    pub(super) fn pending_interrupts<B: Bus>(&self, bus: &mut B) -> InterruptFlags {
        let iflags = bus.read8(IF_ADDR);
        let ie = bus.read8(IE_ADDR);
        InterruptFlags::from_bits_truncate(iflags & ie)
    }

    /// Service the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns the cycles spent, or 0 when nothing was dispatched. Any pending
    /// enabled interrupt ends HALT first, whether or not IME is set.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let pending = self.pending_interrupts(bus);
        let Some(source) = pending.highest_priority() else {
            return 0;
        };

        self.halted = false;
        if !self.ime {
            return 0;
        }

        self.ime = false;
        self.ime_enable_pending = false;

        let return_pc = self.regs.pc;
        self.push_u16(bus, return_pc);
        let vector = source.vector();
        self.regs.pc = vector;

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !source.bits());

        if bus.tracing() {
            bus.trace(TraceEvent::Interrupt { vector, return_pc });
        }
        DISPATCH_CYCLES
    }

    /// Turn IME on once the instruction after EI has completed.
    ///
    /// `armed` is the pending state sampled before that instruction ran, so
    /// EI itself never enables IME and a DI in between cancels it.
    pub(super) fn apply_ime_delay(&mut self, armed: bool) {
        if armed && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }
    }
}
