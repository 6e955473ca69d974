/// A color with the layout of `D2D1_COLOR_F`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `rgb` is packed as `0xRRGGBB`; the top byte is ignored.
    #[inline]
    pub fn from_rgb(rgb: u32, alpha: f32) -> Self {
        const SHIFT_RED: u32 = 16;
        const SHIFT_GREEN: u32 = 8;
        const SHIFT_BLUE: u32 = 0;
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(
            channel(SHIFT_RED),
            channel(SHIFT_GREEN),
            channel(SHIFT_BLUE),
            alpha,
        )
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(src: [f32; 4]) -> Self {
        Self::new(src[0], src[1], src[2], src[3])
    }
}

impl From<(f32, f32, f32, f32)> for Rgba {
    #[inline]
    fn from(src: (f32, f32, f32, f32)) -> Self {
        Self::new(src.0, src.1, src.2, src.3)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}

#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    Rgba::new(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_test() {
        assert_eq!(std::mem::size_of::<Rgba>(), 16);
        let c = rgba(0.1, 0.2, 0.3, 0.4);
        let raw: [f32; 4] = unsafe { std::mem::transmute(c) };
        assert_eq!(raw, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn from_rgb_test() {
        let c = Rgba::from_rgb(0xff8000, 0.5);
        assert_eq!(c, Rgba::new(1.0, 128.0 / 255.0, 0.0, 0.5));
        assert_eq!(Rgba::from_rgb(0xff00_00ff, 1.0), Rgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn display_test() {
        assert_eq!(Rgba::from_rgb(0x336699, 1.0).to_string(), "#336699FF");
        assert_eq!(rgba(2.0, -1.0, 0.0, 0.0).to_string(), "#FF000000");
    }
}
