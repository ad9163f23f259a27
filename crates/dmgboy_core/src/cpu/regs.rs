/// Register file of the LR35902.
///
/// Eight 8-bit registers, three of the pairs (BC, DE, HL) plus AF addressable
/// as 16-bit values, and the 16-bit SP/PC. Only the upper nibble of F exists
/// in hardware; every path that writes F masks the lower nibble away.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// Flag bits in F.
///
/// Bits 0-3 always read as zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl Registers {
    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    /// 16-bit pair by the `rp` selector used in loads and INC/DEC/ADD:
    /// 0=BC, 1=DE, 2=HL, 3=SP.
    pub fn rp(&self, sel: u8) -> u16 {
        match sel & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    pub fn set_rp(&mut self, sel: u8, value: u16) {
        match sel & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// 16-bit pair by the `rp2` selector used by PUSH/POP: AF replaces SP.
    pub fn rp2(&self, sel: u8) -> u16 {
        match sel & 0x03 {
            3 => self.af(),
            other => self.rp(other),
        }
    }

    pub fn set_rp2(&mut self, sel: u8, value: u16) {
        match sel & 0x03 {
            3 => self.set_af(value),
            other => self.set_rp(other, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Flag, Registers};

    #[test]
    fn rp_selectors_round_trip_every_value() {
        let mut regs = Registers::default();
        for sel in 0..4u8 {
            for value in 0..=u16::MAX {
                regs.set_rp(sel, value);
                assert_eq!(regs.rp(sel), value, "rp selector {sel}");
            }
        }
    }

    #[test]
    fn pairs_are_big_endian_views_of_the_bytes() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0x5678);
        regs.set_hl(0x9ABC);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0x56, 0x78));
        assert_eq!((regs.h, regs.l), (0x9A, 0xBC));
    }

    #[test]
    fn af_never_exposes_low_nibble_of_f() {
        let mut regs = Registers::default();
        regs.set_rp2(3, 0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f, 0xF0);
        assert_eq!(regs.rp2(3), 0x12F0);

        regs.f = 0xFF;
        assert_eq!(regs.af() & 0x000F, 0);
    }

    #[test]
    fn flag_bits_map_to_upper_nibble() {
        let mut regs = Registers::default();
        regs.set_flag(Flag::Z, true);
        regs.set_flag(Flag::C, true);
        assert_eq!(regs.f, 0x90);
        assert!(regs.flag(Flag::Z));
        assert!(!regs.flag(Flag::N));
        regs.set_flag(Flag::Z, false);
        assert_eq!(regs.f, 0x10);
    }
}
