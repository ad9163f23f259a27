use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let sel = opcode >> 3;
        let value = self.read_reg8(bus, sel);
        let result = self.inc8(value);
        self.write_reg8(bus, sel, result);
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let sel = opcode >> 3;
        let value = self.read_reg8(bus, sel);
        let result = self.dec8(value);
        self.write_reg8(bus, sel, result);
    }

    // 16-bit INC/DEC leave the flags alone.

    pub(super) fn exec_inc16(&mut self, opcode: u8) {
        let sel = opcode >> 4;
        let value = self.regs.rp(sel).wrapping_add(1);
        self.regs.set_rp(sel, value);
    }

    pub(super) fn exec_dec16(&mut self, opcode: u8) {
        let sel = opcode >> 4;
        let value = self.regs.rp(sel).wrapping_sub(1);
        self.regs.set_rp(sel, value);
    }
}
