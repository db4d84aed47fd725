// File: crates/bars-core/src/types.rs
// Summary: Shared types and constants (figure size, resolution, subplot placement).

/// Figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 14.0;
/// Figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Output resolution in dots per inch.
pub const DPI: f32 = 300.0;
/// Typographic points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Subplot edges as fractions of the figure, measured from the left and the bottom.
/// Contract: 0 <= left < right <= 1 and 0 <= bottom < top <= 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl SubplotParams {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Pixel insets for a `width` x `height` surface.
    pub fn to_insets(&self, width: i32, height: i32) -> Insets {
        let w = width as f32;
        let h = height as f32;
        Insets::new(
            (self.left * w).round() as u32,
            ((1.0 - self.right) * w).round() as u32,
            ((1.0 - self.top) * h).round() as u32,
            (self.bottom * h).round() as u32,
        )
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.10, 0.94, 0.78, 0.15)
    }
}

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
}
