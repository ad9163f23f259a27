use super::{Cpu, Flag};

/// The eight accumulator operations selected by bits 3-5 of the 0x80-0xBF
/// block and of the `op A,d8` immediates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

impl Cpu {
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        let carry = self.get_flag(Flag::C);
        match op {
            AluOp::Add => self.regs.a = self.add8(self.regs.a, value, false),
            AluOp::Adc => self.regs.a = self.add8(self.regs.a, value, carry),
            AluOp::Sub => self.regs.a = self.sub8(self.regs.a, value, false),
            AluOp::Sbc => self.regs.a = self.sub8(self.regs.a, value, carry),
            AluOp::Cp => {
                self.sub8(self.regs.a, value, false);
            }
            AluOp::And => self.logic(self.regs.a & value, true),
            AluOp::Xor => self.logic(self.regs.a ^ value, false),
            AluOp::Or => self.logic(self.regs.a | value, false),
        }
    }

    /// 8-bit add with optional carry in; H from bit 3, C from bit 7.
    fn add8(&mut self, lhs: u8, rhs: u8, carry_in: bool) -> u8 {
        let c = carry_in as u8;
        let wide = lhs as u16 + rhs as u16 + c as u16;
        let result = wide as u8;
        self.regs.f = 0;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (lhs & 0x0F) + (rhs & 0x0F) + c > 0x0F);
        self.set_flag(Flag::C, wide > 0xFF);
        result
    }

    /// 8-bit subtract with optional borrow in; H/C are borrows.
    fn sub8(&mut self, lhs: u8, rhs: u8, borrow_in: bool) -> u8 {
        let c = borrow_in as u8;
        let result = lhs.wrapping_sub(rhs).wrapping_sub(c);
        self.regs.f = 0;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (lhs & 0x0F) < (rhs & 0x0F) + c);
        self.set_flag(Flag::C, (lhs as u16) < rhs as u16 + c as u16);
        result
    }

    fn logic(&mut self, result: u8, half_carry: bool) {
        self.regs.a = result;
        self.regs.f = 0;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half_carry);
    }

    /// INC r: C untouched.
    pub(super) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r: C untouched.
    pub(super) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// ADD HL,rr: Z untouched, H from bit 11, C from bit 15.
    pub(super) fn add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, carry);
        self.regs.set_hl(result);
    }

    /// SP plus a signed 8-bit offset, as used by ADD SP,r8 and LD HL,SP+r8.
    ///
    /// Z and N clear; H and C come from the unsigned low-byte addition.
    pub(super) fn add_sp_offset(&mut self, offset: u8) -> u16 {
        let sp = self.regs.sp;
        self.regs.f = 0;
        self.set_flag(Flag::H, (sp & 0x000F) + (offset as u16 & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (sp & 0x00FF) + offset as u16 > 0x00FF);
        sp.wrapping_add(offset as i8 as u16)
    }

    /// DAA after an addition or subtraction, keyed on N, H and C.
    pub(super) fn daa(&mut self) {
        let mut a = self.regs.a;
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) || (!self.get_flag(Flag::N) && a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if carry || (!self.get_flag(Flag::N) && a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        a = if self.get_flag(Flag::N) {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        self.regs.a = a;
        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
    }
}
