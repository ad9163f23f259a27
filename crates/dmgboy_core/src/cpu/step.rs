use super::{Bus, Cpu};
use crate::platform::TraceEvent;

/// Cost of one idle step while halted.
const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute one step and return the T-cycles it took.
    ///
    /// A step services at most one interrupt, then either idles (HALT) or runs
    /// one instruction, all within the same call. The total is handed to
    /// `Bus::end_instruction` before returning so the rest of the machine
    /// advances by exactly the same amount.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.begin_instruction();

        let mut cycles = self.handle_interrupts(bus);

        if self.halted {
            cycles += HALT_IDLE_CYCLES;
            bus.end_instruction(cycles);
            return cycles;
        }

        let armed = self.ime_enable_pending;
        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        if bus.tracing() {
            bus.trace(TraceEvent::Instruction { pc, opcode });
        }
        cycles += self.exec_opcode(bus, opcode);

        bus.end_instruction(cycles);
        self.apply_ime_delay(armed);
        cycles
    }
}
