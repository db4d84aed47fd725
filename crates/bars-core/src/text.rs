// File: crates/bars-core/src/text.rs
// Summary: Font loading (four Gilroy weights) and anchored text layout using Skia textlayout.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle, TypefaceFontProvider};
use tracing::debug;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [FontWeight::Regular, FontWeight::Medium, FontWeight::SemiBold, FontWeight::Bold];

    pub fn file_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "Gilroy-Regular.ttf",
            FontWeight::Medium => "Gilroy-Medium.ttf",
            FontWeight::SemiBold => "Gilroy-SemiBold.ttf",
            FontWeight::Bold => "Gilroy-Bold.ttf",
        }
    }

    /// Family alias the typeface is registered under.
    pub fn family(self) -> &'static str {
        match self {
            FontWeight::Regular => "Gilroy-Regular",
            FontWeight::Medium => "Gilroy-Medium",
            FontWeight::SemiBold => "Gilroy-SemiBold",
            FontWeight::Bold => "Gilroy-Bold",
        }
    }
}

/// The four loaded weights. Immutable once built; pass by reference to renderers.
pub struct FontSet {
    dir: PathBuf,
    typefaces: Vec<(FontWeight, skia::Typeface)>,
}

impl FontSet {
    /// Load every weight from `dir`. Any missing or unreadable file is an error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mgr = skia::FontMgr::default();
        let mut typefaces = Vec::with_capacity(FontWeight::ALL.len());
        for weight in FontWeight::ALL {
            let path = dir.join(weight.file_name());
            let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ChartError::FontMissing { path: path.clone() },
                _ => ChartError::Io(e),
            })?;
            let typeface = mgr
                .new_from_bytes(&bytes, None)
                .ok_or_else(|| ChartError::FontDecode { path: path.clone() })?;
            debug!(path = %path.display(), family = %typeface.family_name(), "loaded font");
            typefaces.push((weight, typeface));
        }
        Ok(Self { dir: dir.to_path_buf(), typefaces })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn typeface(&self, weight: FontWeight) -> Option<&skia::Typeface> {
        self.typefaces.iter().find(|(w, _)| *w == weight).map(|(_, t)| t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    /// Anchor is the first line's alphabetic baseline.
    Baseline,
    Bottom,
}

/// Text style request: weight, size in pixels, color.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub weight: FontWeight,
    pub size_px: f32,
    pub color: skia::Color,
}

/// Lays out and paints text using only the typefaces from a `FontSet`.
pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new(set: &FontSet) -> Self {
        let mut provider = TypefaceFontProvider::new();
        for (weight, typeface) in &set.typefaces {
            provider.register_typeface(typeface.clone(), Some(weight.family()));
        }
        let mgr: skia::FontMgr = provider.into();
        let mut fc = FontCollection::new();
        // No system fallback so output depends only on the loaded files.
        fc.set_default_font_manager(mgr, None);
        fc.disable_font_fallback();
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size_px.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&[spec.weight.family()]);
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width of the longest line and total height, in pixels.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Paint `text` so that the anchor `(x, y)` sits at the requested alignment.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, h: HAlign, v: VAlign) {
        let p = self.layout(text, spec);
        let width = p.longest_line();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - width * 0.5,
            HAlign::Right => x - width,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - p.height() * 0.5,
            VAlign::Baseline => y - p.alphabetic_baseline(),
            VAlign::Bottom => y - p.height(),
        };
        p.paint(canvas, (left, top));
    }
}
