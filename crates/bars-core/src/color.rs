// File: crates/bars-core/src/color.rs
// Summary: Floating point RGB color with hex parsing, interpolation and Skia conversion.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// RGB color with channels in [0, 1].
///
/// Channels are not clamped here; out-of-range values are handed to Skia as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ChartError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| -> Result<f64> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ChartError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Per-channel linear interpolation: `self + (other - self) * t`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_color4f(self, alpha: f32) -> skia::Color4f {
        skia::Color4f::new(self.r as f32, self.g as f32, self.b as f32, alpha)
    }

    /// 8-bit channels, rounded and clamped.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_skia(self) -> skia::Color {
        let [r, g, b] = self.to_rgb8();
        skia::Color::from_argb(255, r, g, b)
    }
}
