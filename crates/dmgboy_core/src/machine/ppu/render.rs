use bitflags::bitflags;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::{Lcdc, Ppu};

/// VRAM offsets of the two 32x32 tile maps ($9800 and $9C00).
const MAP_LOW: usize = 0x1800;
const MAP_HIGH: usize = 0x1C00;
const MAP_WIDTH: usize = 32;
const TILE_BYTES: usize = 16;
const SPRITE_COUNT: usize = 40;
/// Windows at WX above this are entirely off screen.
const WX_MAX: u8 = 166;

bitflags! {
    /// OAM byte 3.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    struct SpriteAttrs: u8 {
        const OBP1      = 1 << 4;
        const X_FLIP    = 1 << 5;
        const Y_FLIP    = 1 << 6;
        const BEHIND_BG = 1 << 7;
    }
}

/// Register snapshot the compositor needs for one line.
#[derive(Copy, Clone, Debug)]
pub(in crate::machine) struct LineRegs {
    pub(in crate::machine) lcdc: Lcdc,
    pub(in crate::machine) scy: u8,
    pub(in crate::machine) scx: u8,
    pub(in crate::machine) ly: u8,
    pub(in crate::machine) wx: u8,
}

impl Ppu {
    /// Composite background, window and sprites for line `regs.ly`, store the
    /// result in the framebuffer and return it.
    pub(in crate::machine) fn render_line(
        &mut self,
        regs: LineRegs,
        vram: &[u8],
        oam: &[u8],
    ) -> [u8; SCREEN_WIDTH] {
        let mut line = [0u8; SCREEN_WIDTH];

        if regs.lcdc.contains(Lcdc::BG_ENABLE) {
            self.draw_background(&mut line, regs, vram);
        }

        if regs.lcdc.contains(Lcdc::WINDOW_ENABLE) && regs.ly >= self.window_y && regs.wx <= WX_MAX {
            self.draw_window(&mut line, regs, vram);
            self.window_line = self.window_line.wrapping_add(1);
        }

        if regs.lcdc.contains(Lcdc::OBJ_ENABLE) {
            self.draw_sprites(&mut line, regs, vram, oam);
        }

        let row = regs.ly as usize;
        if row < SCREEN_HEIGHT {
            self.framebuffer[row * SCREEN_WIDTH..(row + 1) * SCREEN_WIDTH].copy_from_slice(&line);
        }
        line
    }

    fn draw_background(&self, line: &mut [u8; SCREEN_WIDTH], regs: LineRegs, vram: &[u8]) {
        let bg_y = regs.ly.wrapping_add(regs.scy);
        let map = map_base(regs.lcdc.contains(Lcdc::BG_MAP_HIGH)) + (bg_y as usize >> 3) * MAP_WIDTH;

        for x in (0..SCREEN_WIDTH).rev() {
            let bg_x = (x as u8).wrapping_add(regs.scx);
            let index = vram[map + (bg_x as usize >> 3)];
            let (lo, hi) = bg_tile_row(vram, regs.lcdc, index, bg_y & 0x07);
            line[x] = self.bg_palette[colour(lo, hi, 7 - (bg_x & 0x07)) as usize];
        }
    }

    fn draw_window(&self, line: &mut [u8; SCREEN_WIDTH], regs: LineRegs, vram: &[u8]) {
        let map = map_base(regs.lcdc.contains(Lcdc::WINDOW_MAP_HIGH))
            + (self.window_line as usize >> 3) * MAP_WIDTH;
        let py = self.window_line & 0x07;
        let start = regs.wx.saturating_sub(7) as usize;

        for x in (start..SCREEN_WIDTH).rev() {
            let win_x = (x as u8).wrapping_sub(regs.wx).wrapping_add(7);
            let index = vram[map + (win_x as usize >> 3)];
            let (lo, hi) = bg_tile_row(vram, regs.lcdc, index, py);
            line[x] = self.bg_palette[colour(lo, hi, 7 - (win_x & 0x07)) as usize];
        }
    }

    /// Lower OAM indices are drawn last, so they win where sprites overlap.
    fn draw_sprites(&self, line: &mut [u8; SCREEN_WIDTH], regs: LineRegs, vram: &[u8], oam: &[u8]) {
        let tall = regs.lcdc.contains(Lcdc::OBJ_TALL);
        let height: u8 = if tall { 16 } else { 8 };
        let ly = regs.ly as u16;

        for entry in oam.chunks_exact(4).take(SPRITE_COUNT).rev() {
            let oy = entry[0];
            let ox = entry[1];
            let attrs = SpriteAttrs::from_bits_truncate(entry[3]);

            if ly + (16 - height as u16) >= oy as u16 || ly + 16 < oy as u16 {
                continue;
            }
            if ox == 0 || ox >= 168 {
                continue;
            }

            let tile = if tall { entry[2] & 0xFE } else { entry[2] };
            let mut py = (ly + 16 - oy as u16) as u8;
            if attrs.contains(SpriteAttrs::Y_FLIP) {
                py = height - 1 - py;
            }
            let addr = tile as usize * TILE_BYTES + 2 * py as usize;
            let (lo, hi) = (vram[addr], vram[addr + 1]);

            let left = ox as i16 - 8;
            for col in 0..8u8 {
                let x = left + col as i16;
                if !(0..SCREEN_WIDTH as i16).contains(&x) {
                    continue;
                }
                let bit = if attrs.contains(SpriteAttrs::X_FLIP) { col } else { 7 - col };
                let c = colour(lo, hi, bit);
                if c == 0 {
                    continue;
                }

                let x = x as usize;
                if attrs.contains(SpriteAttrs::BEHIND_BG) && line[x] != self.bg_palette[0] {
                    continue;
                }
                let slot = if attrs.contains(SpriteAttrs::OBP1) { c as usize + 4 } else { c as usize };
                line[x] = self.sp_palette[slot];
            }
        }
    }
}

#[inline]
fn map_base(high: bool) -> usize {
    if high {
        MAP_HIGH
    } else {
        MAP_LOW
    }
}

/// The two bitplane bytes of row `py` of a background/window tile.
///
/// With LCDC.4 clear, indices are signed around $9000, which is the same as
/// unsigned indices from $8800 offset by 0x80.
#[inline]
fn bg_tile_row(vram: &[u8], lcdc: Lcdc, index: u8, py: u8) -> (u8, u8) {
    let base = if lcdc.contains(Lcdc::TILES_UNSIGNED) {
        index as usize * TILE_BYTES
    } else {
        0x0800 + ((index as usize + 0x80) % 0x100) * TILE_BYTES
    };
    let addr = base + 2 * py as usize;
    (vram[addr], vram[addr + 1])
}

#[inline]
fn colour(lo: u8, hi: u8, bit: u8) -> u8 {
    ((lo >> bit) & 0x01) | (((hi >> bit) & 0x01) << 1)
}
