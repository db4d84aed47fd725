// File: crates/bars-core/src/error.rs
// Summary: Error type shared by table construction, font loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("font file not found: {}", path.display())]
    FontMissing { path: PathBuf },

    #[error("font file could not be decoded: {}", path.display())]
    FontDecode { path: PathBuf },

    #[error("model '{model}' has {got} scores but the table has {expected} benchmarks")]
    ScoreShape { model: String, expected: usize, got: usize },

    #[error("model '{model}' has an invalid score {value} for '{benchmark}' (must be finite and >= 0)")]
    InvalidScore { model: String, benchmark: String, value: f64 },

    #[error("score table has no benchmarks")]
    EmptyBenchmarks,

    #[error("model '{0}' appears more than once")]
    DuplicateModel(String),

    #[error("invalid hex color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back {width}x{height} RGBA pixels")]
    ReadPixels { width: i32, height: i32 },

    #[error("encode {0} failed")]
    Encode(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
