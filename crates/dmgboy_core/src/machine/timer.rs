/// Divider and programmable timer.
///
/// DIV counts up once every 256 T-cycles from its own sub-counter. TIMA
/// counts at the rate picked by TAC while TAC bit 2 is set and reloads from
/// TMA when it overflows, which is when the timer interrupt is requested.
mod io;

/// T-cycles per DIV increment.
const DIV_PERIOD: u32 = 256;

#[derive(Clone, Debug)]
pub(super) struct Timer {
    div: u8,
    div_counter: u32,
    tima: u8,
    tma: u8,
    /// Low 3 bits only.
    tac: u8,
    tima_counter: u32,
}

impl Timer {
    /// Power-on state: DIV reads 0xAB, TIMA stopped.
    pub(super) fn new() -> Self {
        Self {
            div: 0xAB,
            div_counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            tima_counter: 0,
        }
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// T-cycles per TIMA increment for the current TAC clock select.
    #[inline]
    fn tima_period(&self) -> u32 {
        match self.tac & 0x03 {
            0 => 1024,
            1 => 16,
            2 => 64,
            _ => 256,
        }
    }

    /// Advance by `cycles`; returns whether TIMA overflowed at least once.
    pub(super) fn step(&mut self, cycles: u32) -> bool {
        self.div_counter += cycles;
        while self.div_counter >= DIV_PERIOD {
            self.div_counter -= DIV_PERIOD;
            self.div = self.div.wrapping_add(1);
        }

        if !self.enabled() {
            return false;
        }

        let period = self.tima_period();
        let mut overflowed = false;
        self.tima_counter += cycles;
        while self.tima_counter >= period {
            self.tima_counter -= period;
            let (next, overflow) = self.tima.overflowing_add(1);
            self.tima = if overflow { self.tma } else { next };
            overflowed |= overflow;
        }
        overflowed
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;

    #[test]
    fn div_ticks_every_256_cycles() {
        let mut timer = Timer::new();
        timer.write_div();
        assert!(!timer.step(255));
        assert_eq!(timer.read_div(), 0);
        timer.step(1);
        assert_eq!(timer.read_div(), 1);
        timer.step(512);
        assert_eq!(timer.read_div(), 3);
    }

    #[test]
    fn div_write_clears_the_sub_counter() {
        let mut timer = Timer::new();
        timer.step(200);
        timer.write_div();
        timer.step(100);
        assert_eq!(timer.read_div(), 0);
        timer.step(156);
        assert_eq!(timer.read_div(), 1);
    }

    #[test]
    fn div_write_restarts_the_tima_period() {
        let mut timer = Timer::new();
        timer.write_tac(0x05);
        timer.step(12);
        timer.write_div();
        timer.step(4);
        assert_eq!(timer.read_tima(), 0);
        timer.step(12);
        assert_eq!(timer.read_tima(), 1);
    }

    #[test]
    fn tima_only_counts_when_enabled() {
        let mut timer = Timer::new();
        timer.write_tac(0x01);
        timer.step(64);
        assert_eq!(timer.read_tima(), 0);

        timer.write_tac(0x05);
        timer.step(64);
        assert_eq!(timer.read_tima(), 4);
    }

    #[test]
    fn tima_overflow_reloads_from_tma() {
        let mut timer = Timer::new();
        timer.write_tma(0xF0);
        timer.write_tima(0xFE);
        timer.write_tac(0x05);

        assert!(!timer.step(16));
        assert_eq!(timer.read_tima(), 0xFF);
        assert!(timer.step(16));
        assert_eq!(timer.read_tima(), 0xF0);
    }

    #[test]
    fn clock_select_periods() {
        for (tac, period) in [(0x04, 1024), (0x05, 16), (0x06, 64), (0x07, 256)] {
            let mut timer = Timer::new();
            timer.write_tac(tac);
            timer.step(period - 1);
            assert_eq!(timer.read_tima(), 0, "tac {tac:02X}");
            timer.step(1);
            assert_eq!(timer.read_tima(), 1, "tac {tac:02X}");
        }
    }
}
