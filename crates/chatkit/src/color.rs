/// RGBA color with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channels
    ///
    /// ```
    /// # use chatkit::Color;
    /// let gray = Color::rgb8(204, 204, 204);
    /// assert_eq!(gray.r, 0.8);
    /// assert_eq!(gray.a, 1.0);
    /// ```
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// 2/3 white, the secondary caption color
    pub fn light_gray() -> Self {
        let v = 2.0 / 3.0;
        Self::rgb(v, v, v)
    }

    /// Accent color used for call-to-action text.
    pub fn primary() -> Self {
        Self::rgb8(1, 132, 255)
    }
}
