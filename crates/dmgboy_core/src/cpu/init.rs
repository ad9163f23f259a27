use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the state the DMG boot ROM leaves behind.
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            ime_enable_pending: false,
        };
        cpu.reset();
        cpu
    }

    /// Return to the post-boot state: A=01 F=B0 BC=0013 DE=00D8 HL=014D
    /// SP=FFFE PC=0100, interrupts disabled.
    pub fn reset(&mut self) {
        self.regs = Registers {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        };
        self.ime = false;
        self.halted = false;
        self.ime_enable_pending = false;
    }
}
