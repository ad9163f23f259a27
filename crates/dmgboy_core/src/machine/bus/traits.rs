use crate::cpu::Bus;
use crate::interrupt::InterruptFlags;
use crate::platform::{ErrorKind, TraceEvent};

use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    /// The divider/timer and the LCD advance by the whole instruction's cost
    /// once it has finished.
    fn end_instruction(&mut self, cycles: u32) {
        if self.timer.step(cycles) {
            self.request_interrupt(InterruptFlags::TIMER);
        }
        self.advance_lcd(cycles);
    }

    fn report_fault(&mut self, kind: ErrorKind, addr: u16) {
        self.error_handler.handle_error(kind, addr);
    }

    fn trace(&mut self, event: TraceEvent) {
        self.emit(event);
    }

    fn tracing(&self) -> bool {
        self.trace_sink.is_some()
    }
}
