use super::Timer;

impl Timer {
    pub(in crate::machine) fn read_div(&self) -> u8 {
        self.div
    }

    /// Any write zeroes DIV and restarts both the DIV and TIMA periods.
    pub(in crate::machine) fn write_div(&mut self) {
        self.div = 0;
        self.div_counter = 0;
        self.tima_counter = 0;
    }

    pub(in crate::machine) fn read_tima(&self) -> u8 {
        self.tima
    }

    pub(in crate::machine) fn write_tima(&mut self, value: u8) {
        self.tima = value;
    }

    pub(in crate::machine) fn read_tma(&self) -> u8 {
        self.tma
    }

    pub(in crate::machine) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// Bits 3-7 are unused and read back as 1.
    pub(in crate::machine) fn read_tac(&self) -> u8 {
        self.tac | 0xF8
    }

    /// Changing the clock select restarts the TIMA period.
    pub(in crate::machine) fn write_tac(&mut self, value: u8) {
        let value = value & 0x07;
        if value & 0x03 != self.tac & 0x03 {
            self.tima_counter = 0;
        }
        self.tac = value;
    }
}
