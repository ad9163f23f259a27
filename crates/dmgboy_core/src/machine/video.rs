use dmgboy_common::Color;

/// DMG shades, lightest first.
const SHADES: [Color; 4] = [Color::WHITE, Color::LIGHT_GRAY, Color::DARK_GRAY, Color::BLACK];

/// Expand shade indices to RGB24. Stops at whichever buffer runs out first.
pub(super) fn render_rgb24(framebuffer: &[u8], buffer: &mut [u8]) {
    for (&shade, out) in framebuffer.iter().zip(buffer.chunks_exact_mut(3)) {
        SHADES[(shade & 0x03) as usize].write_rgb24(out);
    }
}

#[cfg(test)]
mod tests {
    use super::render_rgb24;

    #[test]
    fn shades_map_from_white_to_black() {
        let mut out = [0u8; 12];
        render_rgb24(&[0, 1, 2, 3], &mut out);
        assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xAA, 0xAA, 0xAA, 0x55, 0x55, 0x55, 0, 0, 0]);
    }

    #[test]
    fn short_output_buffers_are_filled_partially() {
        let mut out = [0x11u8; 4];
        render_rgb24(&[3, 3], &mut out);
        assert_eq!(out, [0, 0, 0, 0x11]);
    }
}
