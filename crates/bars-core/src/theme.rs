// File: crates/bars-core/src/theme.rs
// Summary: Colors for the comparison figure (background, grid, frame, text, legend).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    /// Grid lines; alpha is applied separately via `grid_alpha`.
    pub grid: skia::Color,
    pub grid_alpha: f32,
    pub frame: skia::Color,
    pub title: skia::Color,
    pub subtitle: skia::Color,
    pub x_tick_label: skia::Color,
    pub y_tick_label: skia::Color,
    pub legend_label: skia::Color,
    /// Value labels above highlighted (gradient) bars.
    pub highlight_label: skia::Color,
    /// Legend swatch for the highlighted model.
    pub highlight_swatch: skia::Color,
}

impl Theme {
    pub fn dark_comparison() -> Self {
        Self {
            background: skia::Color::from_argb(255, 0x1a, 0x1a, 0x1a),
            grid: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            grid_alpha: 0.6,
            frame: skia::Color::from_argb(255, 0x3a, 0x3a, 0x3a),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            subtitle: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            x_tick_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            y_tick_label: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            legend_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            highlight_label: skia::Color::from_argb(255, 0x00, 0xe5, 0xff),
            highlight_swatch: skia::Color::from_argb(255, 0x00, 0xce, 0xd1),
        }
    }

    /// Grid color with `grid_alpha` folded into the alpha channel.
    pub fn grid_color(&self) -> skia::Color {
        let a = (self.grid_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.grid.with_a(a)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_comparison()
    }
}
