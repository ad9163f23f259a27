use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as i8;
        self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
    }

    /// The displacement is always fetched so PC skips it when not taken.
    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> bool {
        let offset = self.fetch8(bus) as i8;
        let taken = self.condition(opcode >> 3);
        if taken {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
        taken
    }

    pub(super) fn exec_jp_a16<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.fetch16(bus);
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> bool {
        let addr = self.fetch16(bus);
        let taken = self.condition(opcode >> 3);
        if taken {
            self.regs.pc = addr;
        }
        taken
    }

    pub(super) fn exec_call_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.push_u16(bus, self.regs.pc);
        self.regs.pc = addr;
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> bool {
        let addr = self.fetch16(bus);
        let taken = self.condition(opcode >> 3);
        if taken {
            self.push_u16(bus, self.regs.pc);
            self.regs.pc = addr;
        }
        taken
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> bool {
        let taken = self.condition(opcode >> 3);
        if taken {
            self.regs.pc = self.pop_u16(bus);
        }
        taken
    }

    /// RETI re-enables interrupts immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        self.push_u16(bus, self.regs.pc);
        self.regs.pc = (opcode & 0x38) as u16;
    }
}
