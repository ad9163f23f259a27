use crate::platform::{ErrorKind, TraceEvent};

/// What the CPU sees of the rest of the machine.
///
/// The CPU is generic over this trait so it can run against the real memory
/// bus or against a flat test memory.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Called once per `Cpu::step`, before the interrupt check.
    fn begin_instruction(&mut self) {}

    /// Called once per `Cpu::step` with the step's total T-cycle cost.
    ///
    /// System buses advance the divider, timer and LCD from here.
    fn end_instruction(&mut self, _cycles: u32) {}

    /// An instruction fault occurred at `addr`.
    fn report_fault(&mut self, kind: ErrorKind, addr: u16);

    /// Optional event hook; the default drops the event.
    fn trace(&mut self, _event: TraceEvent) {}

    /// Whether `trace` does anything. Lets the CPU skip building events.
    fn tracing(&self) -> bool {
        false
    }
}
