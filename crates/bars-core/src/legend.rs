// File: crates/bars-core/src/legend.rs
// Summary: Single-row legend with solid or hatched swatches and multi-line labels.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::hatch::{draw_hatched_rect, HatchStyle};
use crate::scores::{BarStyle, ScoreTable};
use crate::text::{FontWeight, HAlign, TextShaper, TextSpec, VAlign};

#[derive(Clone, Copy, Debug)]
pub enum Swatch {
    Solid(skia::Color),
    Hatched(skia::Color),
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub swatch: Swatch,
    pub label: String,
}

/// Spacing in multiples of the font size, as for a frameless legend.
#[derive(Clone, Copy, Debug)]
pub struct LegendMetrics {
    pub font_px: f32,
    pub handle_length: f32,
    pub handle_height: f32,
    pub handle_text_pad: f32,
    pub column_spacing: f32,
    pub border_pad: f32,
}

impl LegendMetrics {
    pub fn new(font_px: f32) -> Self {
        Self {
            font_px,
            handle_length: 1.5,
            handle_height: 1.5,
            handle_text_pad: 0.8,
            column_spacing: 1.5,
            border_pad: 0.4,
        }
    }
}

/// One entry per model: "name\nnote", gradient models get `highlight` as a solid swatch.
pub fn entries(table: &ScoreTable, highlight: skia::Color) -> Vec<LegendEntry> {
    table
        .models()
        .iter()
        .map(|m| {
            let label = match &m.note {
                Some(note) => format!("{}\n{}", m.name, note),
                None => m.name.clone(),
            };
            let swatch = match m.style {
                BarStyle::Gradient { .. } => Swatch::Solid(highlight),
                BarStyle::Hatched { color } => Swatch::Hatched(color.to_skia()),
            };
            LegendEntry { swatch, label }
        })
        .collect()
}

/// Lay the entries out in one row centered on `center_x` with its top edge at `top`.
#[allow(clippy::too_many_arguments)]
pub fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    entries: &[LegendEntry],
    center_x: f32,
    top: f32,
    metrics: &LegendMetrics,
    label_color: skia::Color,
    hatch: &HatchStyle,
) {
    if entries.is_empty() {
        return;
    }
    let em = metrics.font_px;
    let spec = TextSpec { weight: FontWeight::Medium, size_px: em, color: label_color };

    let sizes: Vec<(f32, f32)> = entries.iter().map(|e| shaper.measure(&e.label, &spec)).collect();
    let handle_w = metrics.handle_length * em;
    let handle_h = metrics.handle_height * em;
    let pad = metrics.handle_text_pad * em;
    let gap = metrics.column_spacing * em;

    let total: f32 = sizes.iter().map(|(w, _)| handle_w + pad + w).sum::<f32>() + gap * (entries.len() - 1) as f32;
    let row_h = sizes.iter().map(|(_, h)| *h).fold(handle_h, f32::max);
    let row_top = top + metrics.border_pad * em;
    let mid_y = row_top + row_h * 0.5;

    let mut x = center_x - total * 0.5;
    for (entry, (w, _)) in entries.iter().zip(&sizes) {
        let swatch = RectF::from_ltrb(x, mid_y - handle_h * 0.5, x + handle_w, mid_y + handle_h * 0.5);
        match entry.swatch {
            Swatch::Solid(color) => {
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_color(color);
                canvas.draw_rect(swatch.to_skia(), &fill);
            }
            Swatch::Hatched(color) => {
                let style = HatchStyle { color, ..*hatch };
                draw_hatched_rect(canvas, swatch, &style);
            }
        }
        shaper.draw(canvas, &entry.label, x + handle_w + pad, mid_y, &spec, HAlign::Left, VAlign::Center);
        x += handle_w + pad + w + gap;
    }
}
