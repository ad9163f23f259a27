use super::timing::CB_CYCLES;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Fetch and execute the byte after a 0xCB prefix.
    ///
    /// `x` (bits 6-7) picks the group, `y` (bits 3-5) the shift kind or bit
    /// number, `z` (bits 0-2) the operand. BIT never writes back.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);

        match x {
            0 => {
                let result = self.shift(y, value);
                self.write_reg8(bus, z, result);
            }
            1 => {
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }

        CB_CYCLES[cb as usize] as u32
    }

    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL. Sets Z from the result and C
    /// from the bit shifted out; N and H clear.
    fn shift(&mut self, kind: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C) as u8;
        let (result, carry_out) = match kind {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | carry_in, value & 0x80 != 0),
            3 => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);
        result
    }
}
