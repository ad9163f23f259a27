use bitflags::bitflags;

bitflags! {
    /// Interrupt sources as laid out in IF ($FF0F) and IE ($FFFF).
    ///
    /// Bit position doubles as priority: bit 0 (V-blank) is serviced first.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct InterruptFlags: u8 {
        const VBLANK   = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER    = 1 << 2;
        const SERIAL   = 1 << 3;
        const JOYPAD   = 1 << 4;
    }
}

impl InterruptFlags {
    /// Highest-priority source in `self`, if any.
    pub fn highest_priority(self) -> Option<InterruptFlags> {
        let bits = self.bits() & Self::all().bits();
        if bits == 0 {
            None
        } else {
            Some(InterruptFlags::from_bits_retain(bits & bits.wrapping_neg()))
        }
    }

    /// Handler address for a single interrupt source.
    ///
    /// $0040, $0048, $0050, $0058, $0060 for V-blank through Joypad.
    pub fn vector(self) -> u16 {
        0x0040 + (self.bits().trailing_zeros() as u16) * 8
    }
}

#[cfg(test)]
mod tests {
    use super::InterruptFlags;

    #[test]
    fn lowest_set_bit_wins() {
        let pending = InterruptFlags::TIMER | InterruptFlags::LCD_STAT | InterruptFlags::JOYPAD;
        assert_eq!(pending.highest_priority(), Some(InterruptFlags::LCD_STAT));
        assert_eq!(InterruptFlags::empty().highest_priority(), None);
        // Bits 5-7 are not interrupt sources.
        assert_eq!(InterruptFlags::from_bits_retain(0xE0).highest_priority(), None);
    }

    #[test]
    fn vectors_follow_priority_order() {
        assert_eq!(InterruptFlags::VBLANK.vector(), 0x0040);
        assert_eq!(InterruptFlags::LCD_STAT.vector(), 0x0048);
        assert_eq!(InterruptFlags::TIMER.vector(), 0x0050);
        assert_eq!(InterruptFlags::SERIAL.vector(), 0x0058);
        assert_eq!(InterruptFlags::JOYPAD.vector(), 0x0060);
    }
}
