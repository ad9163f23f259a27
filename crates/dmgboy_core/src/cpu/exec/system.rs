use crate::cpu::{Bus, Cpu};
use crate::platform::TraceEvent;

impl Cpu {
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        self.halted = true;
        if bus.tracing() {
            bus.trace(TraceEvent::Halt {
                pc: self.regs.pc.wrapping_sub(1),
            });
        }
    }

    /// STOP behaves like HALT after consuming its padding byte.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        let _ = self.fetch8(bus);
        self.halted = true;
        if bus.tracing() {
            bus.trace(TraceEvent::Halt {
                pc: self.regs.pc.wrapping_sub(2),
            });
        }
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
    }

    pub(super) fn exec_ei(&mut self) {
        self.ime_enable_pending = true;
    }
}
