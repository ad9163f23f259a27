use bitflags::bitflags;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

mod render;

pub(super) use render::LineRegs;

/// T-cycles spent in OAM scan at the start of a visible line.
pub(super) const OAM_SCAN_END: u32 = 80;
/// Line cycle at which pixel transfer ends and H-blank begins (80 + 172).
pub(super) const TRANSFER_END: u32 = 252;
pub(super) const LINE_CYCLES: u32 = 456;
pub(super) const LINES_PER_FRAME: u8 = 154;
/// First V-blank line.
pub(super) const VBLANK_LINE: u8 = 144;

bitflags! {
    /// LCD control register ($FF40).
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub(super) struct Lcdc: u8 {
        const BG_ENABLE      = 1 << 0;
        const OBJ_ENABLE     = 1 << 1;
        const OBJ_TALL       = 1 << 2;
        const BG_MAP_HIGH    = 1 << 3;
        const TILES_UNSIGNED = 1 << 4;
        const WINDOW_ENABLE  = 1 << 5;
        const WINDOW_MAP_HIGH = 1 << 6;
        const LCD_ENABLE     = 1 << 7;
    }
}

bitflags! {
    /// LCD status register ($FF41), interrupt-select and coincidence bits.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub(super) struct Stat: u8 {
        const COINCIDENCE = 1 << 2;
        const HBLANK_IRQ  = 1 << 3;
        const VBLANK_IRQ  = 1 << 4;
        const OAM_IRQ     = 1 << 5;
        const LYC_IRQ     = 1 << 6;
    }
}

/// LCD mode as reported in STAT bits 0-1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Transfer = 3,
}

impl Mode {
    pub(super) fn from_stat(stat: u8) -> Self {
        match stat & 0x03 {
            0 => Mode::HBlank,
            1 => Mode::VBlank,
            2 => Mode::OamScan,
            _ => Mode::Transfer,
        }
    }
}

/// Display state that lives outside the I/O register file.
///
/// Mode, LY and LYC stay in the register file where the CPU can see them;
/// this holds the per-line cycle counter, the per-frame window bookkeeping,
/// the palette lookup tables and the finished frame.
#[derive(Clone, Debug)]
pub(super) struct Ppu {
    /// Cycles into the current line, 0..456.
    pub(super) line_cycles: u32,
    /// Set when the LCD is switched on; the first H-blank after that skips
    /// rendering and clears it.
    pub(super) lcd_blank: bool,
    pub(super) frame_complete: bool,
    /// Window rows drawn so far this frame.
    pub(super) window_line: u8,
    /// WY as sampled at the start of the frame.
    pub(super) window_y: u8,
    /// BGP fields, indexed by colour number.
    pub(super) bg_palette: [u8; 4],
    /// OBP0 fields in 0..4, OBP1 fields in 4..8.
    pub(super) sp_palette: [u8; 8],
    /// V-blanks reached since power-on.
    pub(super) frames: u64,
    framebuffer: Vec<u8>,
}

impl Ppu {
    pub(super) fn new() -> Self {
        Self {
            line_cycles: 0,
            lcd_blank: false,
            frame_complete: false,
            window_line: 0,
            window_y: 0,
            bg_palette: [0; 4],
            sp_palette: [0; 8],
            frames: 0,
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub(super) fn set_bg_palette(&mut self, value: u8) {
        self.bg_palette = palette_fields(value);
    }

    /// `index` 0 is OBP0, 1 is OBP1.
    pub(super) fn set_sprite_palette(&mut self, index: usize, value: u8) {
        let base = index * 4;
        self.sp_palette[base..base + 4].copy_from_slice(&palette_fields(value));
    }

    /// Palette-mapped shades, one byte per pixel, row-major.
    pub(super) fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }
}

/// Split a palette register into its four 2-bit shade fields.
fn palette_fields(value: u8) -> [u8; 4] {
    [value & 0x03, (value >> 2) & 0x03, (value >> 4) & 0x03, (value >> 6) & 0x03]
}
