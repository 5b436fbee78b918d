/// Width and height of a laid out region, in layout units (points).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BubbleSize {
    pub width: f32,
    pub height: f32,
}

impl BubbleSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square region with equal sides
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// Padding inside a region, applied before its text is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// Create insets with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use chatkit::Insets;
    /// let insets = Insets::symmetric(12.0, 8.0);
    /// assert_eq!(insets.left, 12.0);
    /// assert_eq!(insets.right, 12.0);
    /// assert_eq!(insets.top, 8.0);
    /// assert_eq!(insets.bottom, 8.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create insets from individual top, right, bottom, left values (CSS-style)
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }
}
