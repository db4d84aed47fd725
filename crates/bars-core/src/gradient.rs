// File: crates/bars-core/src/gradient.rs
// Summary: Vertical gradient bars approximated by stacked solid-color segments.

use std::num::NonZeroUsize;

use crate::color::Rgb;

/// Segment count used when none is configured.
pub const DEFAULT_SEGMENTS: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => panic!("segment count must be non-zero"),
};

/// One solid rectangle of a gradient bar, in data units (y grows upwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl BarSegment {
    /// Upper edge (`y + height`).
    pub fn top(&self) -> f64 { self.y + self.height }
}

/// Receives segments in emission order (bottom to top).
pub trait SegmentSink {
    fn fill_segment(&mut self, segment: BarSegment);
}

impl SegmentSink for Vec<BarSegment> {
    fn fill_segment(&mut self, segment: BarSegment) {
        self.push(segment);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bottom: Rgb,
    pub top: Rgb,
}

impl GradientBar {
    /// The `n` segments of this bar, bottom to top.
    ///
    /// Segment `i` spans `[y + i*h/n, y + (i+1)*h/n)` and is filled with the
    /// interpolation at `i/n`, so the last segment stops one step short of `top`.
    pub fn segments(&self, n: NonZeroUsize) -> impl Iterator<Item = BarSegment> + '_ {
        let n = n.get();
        let segment_height = self.height / n as f64;
        (0..n).map(move |i| {
            let ratio = i as f64 / n as f64;
            BarSegment {
                x: self.x,
                y: self.y + i as f64 * segment_height,
                width: self.width,
                height: segment_height,
                color: self.bottom.lerp(self.top, ratio),
            }
        })
    }
}

/// Submit the `n` segments of a gradient bar to `sink`.
pub fn draw_gradient_bar<S: SegmentSink + ?Sized>(sink: &mut S, bar: &GradientBar, n: NonZeroUsize) {
    for segment in bar.segments(n) {
        sink.fill_segment(segment);
    }
}
