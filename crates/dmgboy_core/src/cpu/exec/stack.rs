use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.regs.rp2(opcode >> 4);
        self.push_u16(bus, value);
    }

    /// POP AF drops the low nibble of F through `set_rp2`.
    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.pop_u16(bus);
        self.regs.set_rp2(opcode >> 4, value);
    }
}
