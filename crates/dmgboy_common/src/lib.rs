pub mod app;
pub mod key;

/// RGBA colour used by frontends when turning emulator output into pixels.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::new_rgb(0xAA, 0xAA, 0xAA);
    pub const DARK_GRAY: Color = Color::new_rgb(0x55, 0x55, 0x55);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    /// Write this colour as three RGB24 bytes at the start of `out`.
    #[inline]
    pub fn write_rgb24(&self, out: &mut [u8]) {
        out[0] = self.r;
        out[1] = self.g;
        out[2] = self.b;
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn write_rgb24_copies_channels_in_order() {
        let mut out = [0u8; 4];
        Color::new_rgb(1, 2, 3).write_rgb24(&mut out);
        assert_eq!(out, [1, 2, 3, 0]);
    }
}
