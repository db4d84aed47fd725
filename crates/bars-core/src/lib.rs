// File: crates/bars-core/src/lib.rs
// Summary: Core library entry point; exports the score table, bar renderers and chart rendering API.

pub mod chart;
pub mod scores;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod color;
pub mod gradient;
pub mod hatch;
pub mod layout;
pub mod legend;
pub mod error;

pub use chart::{ComparisonChart, PlotCanvas, RenderOptions};
pub use scores::{BarStyle, ModelScores, ScoreTable};
pub use axis::Axis;
pub use color::Rgb;
pub use error::{ChartError, Result};
pub use gradient::{draw_gradient_bar, BarSegment, GradientBar, SegmentSink, DEFAULT_SEGMENTS};
pub use layout::GroupLayout;
pub use theme::Theme;
pub use text::{FontSet, FontWeight, TextShaper};
