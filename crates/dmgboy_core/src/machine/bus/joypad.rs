use bitflags::bitflags;

use crate::interrupt::InterruptFlags;

use super::super::io;
use super::GameBoyBus;

bitflags! {
    /// DMG buttons, laid out as in the active-low input byte: face buttons in
    /// the low nibble, D-pad in the high nibble.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct JoypadButton: u8 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const RIGHT  = 1 << 4;
        const LEFT   = 1 << 5;
        const UP     = 1 << 6;
        const DOWN   = 1 << 7;
    }
}

impl GameBoyBus {
    /// P1 reads: bit 4 low selects the D-pad, bit 5 low the buttons. A
    /// pressed button reads as 0.
    pub(super) fn read_joyp(&self) -> u8 {
        let joyp = self.io[io::JOYP] | 0x0F;
        if joyp & 0x10 == 0 {
            joyp & ((self.joypad >> 4) | 0xF0)
        } else if joyp & 0x20 == 0 {
            joyp & (self.joypad | 0xF0)
        } else {
            joyp
        }
    }

    /// Only the select bits are writable; bits 6-7 read as 1.
    pub(super) fn write_joyp(&mut self, value: u8) {
        self.io[io::JOYP] = (value & 0x30) | 0xC0;
    }

    pub(in crate::machine) fn set_button(&mut self, button: JoypadButton, pressed: bool) {
        if pressed {
            self.joypad &= !button.bits();
            self.request_interrupt(InterruptFlags::JOYPAD);
        } else {
            self.joypad |= button.bits();
        }
    }
}
