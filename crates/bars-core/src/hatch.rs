// File: crates/bars-core/src/hatch.rs
// Summary: Outline bars filled with a `////` diagonal hatch.

use skia_safe as skia;

use crate::geometry::RectF;

/// Hatch lines per inch for a `////` pattern (4 strokes x 6 per inch).
pub const HATCH_LINES_PER_INCH: f32 = 24.0;

#[derive(Clone, Copy, Debug)]
pub struct HatchStyle {
    pub color: skia::Color,
    /// Distance between neighbouring lines, measured along X, in pixels.
    pub spacing_px: f32,
    pub line_width_px: f32,
    pub edge_width_px: f32,
}

impl HatchStyle {
    pub fn for_dpi(color: skia::Color, dpi: f32, line_width_px: f32, edge_width_px: f32) -> Self {
        Self { color, spacing_px: dpi / HATCH_LINES_PER_INCH, line_width_px, edge_width_px }
    }
}

/// Offsets `c = x + y` of the hatch lines crossing `rect`.
///
/// Lines are anchored at the device origin so neighbouring bars share phase.
pub fn hatch_offsets(rect: RectF, spacing: f32) -> Vec<f32> {
    let spacing = spacing.max(1.0);
    let lo = rect.left + rect.top;
    let hi = rect.right + rect.bottom;
    let first = (lo / spacing).floor() as i64;
    let last = (hi / spacing).ceil() as i64;
    (first..=last).map(|k| k as f32 * spacing).collect()
}

/// Draw an unfilled bar with a diagonal hatch clipped to it and a solid edge.
pub fn draw_hatched_rect(canvas: &skia::Canvas, rect: RectF, style: &HatchStyle) {
    let rect = rect.sorted();
    if rect.width() <= 0.0 {
        return;
    }

    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(style.line_width_px);
    line.set_color(style.color);

    if rect.height() > 0.0 {
        canvas.save();
        canvas.clip_rect(rect.to_skia(), None, Some(true));
        // "/" rises to the right: on screen y decreases as x grows, so x + y is constant.
        for c in hatch_offsets(rect, style.spacing_px) {
            canvas.draw_line((c - rect.bottom, rect.bottom), (c - rect.top, rect.top), &line);
        }
        canvas.restore();
    }

    let mut edge = line;
    edge.set_stroke_width(style.edge_width_px);
    canvas.draw_rect(rect.to_skia(), &edge);
}
