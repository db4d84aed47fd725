// File: crates/bars-core/src/chart.rs
// Summary: Comparison chart and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use std::num::NonZeroUsize;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::{pt_to_px, RectF};
use crate::gradient::{draw_gradient_bar, BarSegment, GradientBar, SegmentSink, DEFAULT_SEGMENTS};
use crate::hatch::{draw_hatched_rect, HatchStyle};
use crate::layout::GroupLayout;
use crate::legend::{self, LegendMetrics};
use crate::scale::{CategoryScale, ValueScale};
use crate::scores::{BarStyle, ScoreTable};
use crate::text::{FontSet, FontWeight, HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{SubplotParams, DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};

/// Legend text size; the em unit for swatch and spacing metrics.
pub const LEGEND_FONT_PT: f32 = 10.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub subplot: SubplotParams,
    pub layout: GroupLayout,
    /// Segments per gradient bar.
    pub segments: NonZeroUsize,
    /// Draw title, tick labels, value labels and legend (requires fonts).
    pub draw_labels: bool,
    pub theme: Theme,
}

impl RenderOptions {
    /// Same figure at another resolution; all point-based sizes scale with it.
    pub fn with_dpi(dpi: f32) -> Self {
        Self {
            width: (FIGURE_WIDTH_IN * dpi).round() as i32,
            height: (FIGURE_HEIGHT_IN * dpi).round() as i32,
            dpi,
            subplot: SubplotParams::default(),
            layout: GroupLayout::default(),
            segments: DEFAULT_SEGMENTS,
            draw_labels: true,
            theme: Theme::default(),
        }
    }

    fn px(&self, points: f32) -> f32 {
        pt_to_px(points, self.dpi)
    }

    /// Convert figure fractions (origin bottom-left) to pixels.
    fn fig_x(&self, fx: f32) -> f32 { fx * self.width as f32 }
    fn fig_y(&self, fy: f32) -> f32 { (1.0 - fy) * self.height as f32 }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::with_dpi(DPI)
    }
}

pub struct ComparisonChart {
    pub table: ScoreTable,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: String,
    pub subtitle: String,
    /// Gap between a bar's top and its value label, in data units.
    pub label_offset: f64,
}

impl ComparisonChart {
    pub fn new(table: ScoreTable) -> Self {
        let x_axis = Axis::categories(table.benchmarks(), 0.6, 0.4);
        Self {
            table,
            x_axis,
            y_axis: Axis::stepped(0.0, 110.0, 0.0, 100.0, 20.0),
            title: "Model performance comparison".to_string(),
            subtitle: "(Corpus-r1 vs Others)".to_string(),
            label_offset: 1.5,
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        fonts: Option<&FontSet>,
        output_png_path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts, fonts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions, fonts: Option<&FontSet>) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts, fonts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels plus (width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions, fonts: Option<&FontSet>) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts, fonts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels { width: w, height: h });
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions, fonts: Option<&FontSet>) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let shaper = match fonts {
            Some(set) if opts.draw_labels => Some(TextShaper::new(set)),
            _ => None,
        };
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        // Plot rect
        let insets = opts.subplot.to_insets(opts.width, opts.height);
        let plot = RectF::from_ltrb(
            insets.left as f32,
            insets.top as f32,
            (opts.width - insets.right as i32) as f32,
            (opts.height - insets.bottom as i32) as f32,
        );
        let xs = CategoryScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let ys = ValueScale::new_linear(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, opts, plot, &ys, &self.y_axis);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        self.draw_bars(canvas, opts, &xs, &ys);
        canvas.restore();

        if let Some(shaper) = &shaper {
            self.draw_value_labels(canvas, shaper, opts, &xs, &ys);
            draw_tick_labels(canvas, shaper, opts, plot, &xs, &ys, &self.x_axis, &self.y_axis);
        }

        draw_frame(canvas, opts);

        if let Some(shaper) = &shaper {
            self.draw_titles(canvas, shaper, opts);
            let entries = legend::entries(&self.table, theme.highlight_swatch);
            let hatch = hatch_style(opts, theme.legend_label);
            let top = plot.top - 0.05 * plot.height();
            legend::draw_legend(
                canvas,
                shaper,
                &entries,
                plot.center_x(),
                top,
                &LegendMetrics::new(opts.px(LEGEND_FONT_PT)),
                theme.legend_label,
                &hatch,
            );
        }

        Ok(surface)
    }

    fn draw_bars(&self, canvas: &skia::Canvas, opts: &RenderOptions, xs: &CategoryScale, ys: &ValueScale) {
        let models = self.table.models();
        let width = opts.layout.bar_width;

        // Hatched bars sit below gradient bars.
        for (i, m) in models.iter().enumerate() {
            let BarStyle::Hatched { color } = m.style else { continue };
            let style = hatch_style(opts, color.to_skia());
            for (j, &score) in m.scores.iter().enumerate() {
                let left = opts.layout.bar_left(j as f64, i, models.len());
                let rect = RectF::from_ltrb(xs.to_px(left), ys.to_px(score), xs.to_px(left + width), ys.to_px(0.0));
                draw_hatched_rect(canvas, rect, &style);
            }
            debug!(model = %m.name, "drew hatched bars");
        }

        let mut sink = PlotCanvas::new(canvas, *xs, *ys);
        for (i, m) in models.iter().enumerate() {
            let BarStyle::Gradient { bottom, top } = m.style else { continue };
            for (j, &score) in m.scores.iter().enumerate() {
                let bar = GradientBar {
                    x: opts.layout.bar_left(j as f64, i, models.len()),
                    y: 0.0,
                    width,
                    height: score,
                    bottom,
                    top,
                };
                draw_gradient_bar(&mut sink, &bar, opts.segments);
            }
            debug!(model = %m.name, segments = opts.segments.get(), "drew gradient bars");
        }
    }

    fn draw_value_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        xs: &CategoryScale,
        ys: &ValueScale,
    ) {
        let models = self.table.models();
        for (i, m) in models.iter().enumerate() {
            let spec = match m.style {
                BarStyle::Gradient { .. } => TextSpec {
                    weight: FontWeight::Bold,
                    size_px: opts.px(12.0),
                    color: opts.theme.highlight_label,
                },
                BarStyle::Hatched { color } => TextSpec {
                    weight: FontWeight::Medium,
                    size_px: opts.px(11.0),
                    color: color.to_skia(),
                },
            };
            for (j, &score) in m.scores.iter().enumerate() {
                let cx = xs.to_px(opts.layout.bar_center(j as f64, i, models.len()));
                let y = ys.to_px(score + self.label_offset);
                shaper.draw(canvas, &value_label(score), cx, y, &spec, HAlign::Center, VAlign::Bottom);
            }
        }
    }

    fn draw_titles(&self, canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions) {
        let theme = &opts.theme;
        let title = TextSpec { weight: FontWeight::Bold, size_px: opts.px(32.0), color: theme.title };
        let subtitle = TextSpec { weight: FontWeight::Regular, size_px: opts.px(16.0), color: theme.subtitle };
        let cx = opts.fig_x(0.5);
        shaper.draw(canvas, &self.title, cx, opts.fig_y(0.92), &title, HAlign::Center, VAlign::Baseline);
        shaper.draw(canvas, &self.subtitle, cx, opts.fig_y(0.86), &subtitle, HAlign::Center, VAlign::Baseline);
    }
}

/// Value label text: shortest round-trip form, always with a fractional part (`21.0`).
pub fn value_label(score: f64) -> String {
    format!("{score:?}")
}

/// Fills gradient segments on a Skia canvas, mapping data units to pixels.
pub struct PlotCanvas<'a> {
    canvas: &'a skia::Canvas,
    xs: CategoryScale,
    ys: ValueScale,
    paint: skia::Paint,
}

impl<'a> PlotCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas, xs: CategoryScale, ys: ValueScale) -> Self {
        let mut paint = skia::Paint::default();
        // Aliased fills keep neighbouring segments seamless.
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        Self { canvas, xs, ys, paint }
    }
}

impl SegmentSink for PlotCanvas<'_> {
    fn fill_segment(&mut self, s: BarSegment) {
        let rect = RectF::from_ltrb(
            self.xs.to_px(s.x),
            self.ys.to_px(s.top()),
            self.xs.to_px(s.x + s.width),
            self.ys.to_px(s.y),
        )
        .sorted();
        self.paint.set_color4f(s.color.to_color4f(1.0), None);
        self.canvas.draw_rect(rect.to_skia(), &self.paint);
    }
}

// ---- helpers ----------------------------------------------------------------

fn hatch_style(opts: &RenderOptions, color: skia::Color) -> HatchStyle {
    HatchStyle::for_dpi(color, opts.dpi, opts.px(1.0), opts.px(1.0))
}

fn draw_grid(canvas: &skia::Canvas, opts: &RenderOptions, plot: RectF, ys: &ValueScale, y_axis: &Axis) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid_color());
    paint.set_anti_alias(true);
    paint.set_stroke_width(opts.px(0.8));

    for &(v, _) in &y_axis.ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: RectF,
    xs: &CategoryScale,
    ys: &ValueScale,
    x_axis: &Axis,
    y_axis: &Axis,
) {
    let theme = &opts.theme;
    let x_spec = TextSpec { weight: FontWeight::Medium, size_px: opts.px(20.0), color: theme.x_tick_label };
    let y_spec = TextSpec { weight: FontWeight::Regular, size_px: opts.px(13.0), color: theme.y_tick_label };

    let x_top = plot.bottom + opts.px(8.0);
    for (v, label) in &x_axis.ticks {
        shaper.draw(canvas, label, xs.to_px(*v), x_top, &x_spec, HAlign::Center, VAlign::Top);
    }
    let y_right = plot.left - opts.px(10.0);
    for (v, label) in &y_axis.ticks {
        shaper.draw(canvas, label, y_right, ys.to_px(*v), &y_spec, HAlign::Right, VAlign::Center);
    }
}

/// Rounded frame around the plot area, in figure fractions with padding.
fn draw_frame(canvas: &skia::Canvas, opts: &RenderOptions) {
    let (x0, y0, w, h, pad, radius) = (0.08, 0.13, 0.88, 0.67, 0.02, 0.02);
    let rect = RectF::from_ltrb(
        opts.fig_x(x0 - pad),
        opts.fig_y(y0 + h + pad),
        opts.fig_x(x0 + w + pad),
        opts.fig_y(y0 - pad),
    );
    let rrect = skia::RRect::new_rect_xy(rect.to_skia(), radius * opts.width as f32, radius * opts.height as f32);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(opts.px(1.5));
    paint.set_color(opts.theme.frame);
    canvas.draw_rrect(rrect, &paint);
}
