// File: crates/bars-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the category (X) and value (Y) axes.

/// Logical X coordinate (benchmark group position).
pub type Logical = f64;
/// Value Y coordinate (score).
pub type Value = f64;

/// Horizontal linear scale mapping [vmin, vmax] onto [left_px, right_px].
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: Logical,
    pub vmax: Logical,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, vmin: Logical, mut vmax: Logical) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { left_px, right_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = self.vmax - self.vmin;
        self.left_px + ((x - self.vmin) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
