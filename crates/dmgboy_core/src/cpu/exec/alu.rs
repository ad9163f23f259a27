use crate::cpu::alu::AluOp;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r over 0x80-0xBF.
    pub(super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.read_reg8(bus, opcode);
        self.alu(AluOp::from_bits(opcode >> 3), value);
    }

    pub(super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.fetch8(bus);
        self.alu(AluOp::from_bits(opcode >> 3), value);
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) {
        let value = self.regs.rp(opcode >> 4);
        self.add16_hl(value);
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        self.regs.sp = self.add_sp_offset(offset);
    }

    /// RLCA, RRCA, RLA, RRA. Unlike the CB forms these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C) as u8;
        let (result, carry_out) = match opcode {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | carry_in, a & 0x80 != 0),
            _ => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
        };
        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }
}
