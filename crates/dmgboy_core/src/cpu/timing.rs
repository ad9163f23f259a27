/// Base T-cycle cost of every unprefixed opcode.
///
/// Conditional JR/JP/CALL/RET list their not-taken cost; the taken penalty is
/// added by the executor. 0xCB is 0 because the prefixed table carries the
/// full cost. The unassigned opcodes are charged 4 so a driver that keeps
/// stepping past a fault still sees time advance.
#[rustfmt::skip]
pub const OP_CYCLES: [u8; 256] = [
//  0   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x
    4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 1x
    8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 2x
    8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 3x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 4x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 5x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 6x
    8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 7x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 8x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 9x
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Ax
    4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // Bx
    8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  0, 12, 24,  8, 16, // Cx
    8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // Dx
   12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // Ex
   12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // Fx
];

/// Extra cycles when a conditional JR is taken.
pub(super) const JR_TAKEN_PENALTY: u32 = 4;
/// Extra cycles when a conditional JP is taken.
pub(super) const JP_TAKEN_PENALTY: u32 = 4;
/// Extra cycles when a conditional CALL is taken.
pub(super) const CALL_TAKEN_PENALTY: u32 = 12;
/// Extra cycles when a conditional RET is taken.
pub(super) const RET_TAKEN_PENALTY: u32 = 12;

/// T-cycle cost of every CB-prefixed opcode, prefix fetch included.
///
/// 8 for register operands, 16 for read-modify-write on (HL), 12 for
/// BIT n,(HL) which never writes back.
pub const CB_CYCLES: [u8; 256] = build_cb_cycles();

const fn build_cb_cycles() -> [u8; 256] {
    let mut table = [8u8; 256];
    let mut op = 0usize;
    while op < 256 {
        if op & 0x07 == 6 {
            table[op] = if op & 0xC0 == 0x40 { 12 } else { 16 };
        }
        op += 1;
    }
    table
}
