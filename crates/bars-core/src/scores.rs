// File: crates/bars-core/src/scores.rs
// Summary: Score table model (benchmarks x models) with per-model bar styles.
// Notes:
// - Shape and value invariants are checked once in `ScoreTable::new`, so the
//   renderer can index scores by benchmark without further checks.

use std::collections::HashSet;

use crate::color::Rgb;
use crate::error::{ChartError, Result};

/// How a model's bars are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarStyle {
    /// Vertical gradient fill, `bottom` at the baseline towards `top`.
    Gradient { bottom: Rgb, top: Rgb },
    /// Unfilled outline with a `////` hatch in `color`.
    Hatched { color: Rgb },
}

#[derive(Clone, Debug)]
pub struct ModelScores {
    pub name: String,
    pub scores: Vec<f64>,
    pub style: BarStyle,
    /// Second legend line, e.g. throughput.
    pub note: Option<String>,
}

impl ModelScores {
    pub fn new(name: impl Into<String>, scores: Vec<f64>, style: BarStyle) -> Self {
        Self { name: name.into(), scores, style, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self.style, BarStyle::Gradient { .. })
    }
}

#[derive(Clone, Debug)]
pub struct ScoreTable {
    benchmarks: Vec<String>,
    models: Vec<ModelScores>,
}

impl ScoreTable {
    /// Build a table, checking that every model has one finite, non-negative
    /// score per benchmark and that model names are unique.
    pub fn new(benchmarks: Vec<String>, models: Vec<ModelScores>) -> Result<Self> {
        if benchmarks.is_empty() {
            return Err(ChartError::EmptyBenchmarks);
        }
        let mut seen = HashSet::new();
        for m in &models {
            if !seen.insert(m.name.as_str()) {
                return Err(ChartError::DuplicateModel(m.name.clone()));
            }
            if m.scores.len() != benchmarks.len() {
                return Err(ChartError::ScoreShape {
                    model: m.name.clone(),
                    expected: benchmarks.len(),
                    got: m.scores.len(),
                });
            }
            for (bench, &value) in benchmarks.iter().zip(&m.scores) {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidScore {
                        model: m.name.clone(),
                        benchmark: bench.clone(),
                        value,
                    });
                }
            }
        }
        Ok(Self { benchmarks, models })
    }

    /// The fixed comparison: Corpus-r1 against four reference models on
    /// GSM8K, MATH500 and AIME 2025.
    pub fn model_comparison() -> Result<Self> {
        let gradient = BarStyle::Gradient {
            bottom: Rgb::new(0.0, 0.7, 0.8),
            top: Rgb::new(0.6, 0.95, 1.0),
        };
        let hatched = |hex: &str| -> Result<BarStyle> { Ok(BarStyle::Hatched { color: Rgb::from_hex(hex)? }) };

        let benchmarks = ["GSM8K", "MATH500", "AIME 2025"].iter().map(|s| s.to_string()).collect();
        let models = vec![
            ModelScores::new("Corpus-r1 (4b)", vec![94.2, 87.3, 23.7], gradient).with_note("~1100 tok/s"),
            ModelScores::new("Claude-3.7-sonnet", vec![91.8, 85.0, 21.0], hatched("#AAAAAA")?).with_note("~44 tok/s"),
            ModelScores::new("Qwen3 (32b)", vec![90.2, 86.9, 19.7], hatched("#888888")?).with_note("~58 tok/s"),
            ModelScores::new("Phi-4 (14b)", vec![91.8, 81.0, 18.0], hatched("#666666")?).with_note("~75 tok/s"),
            ModelScores::new("Gemma-3 (4b)", vec![89.2, 76.6, 12.7], hatched("#505050")?).with_note("~120 tok/s"),
        ];
        Self::new(benchmarks, models)
    }

    pub fn benchmarks(&self) -> &[String] { &self.benchmarks }

    pub fn models(&self) -> &[ModelScores] { &self.models }

    pub fn model(&self, name: &str) -> Option<&ModelScores> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Largest score in the table (0.0 when there are no models).
    pub fn max_score(&self) -> f64 {
        self.models
            .iter()
            .flat_map(|m| m.scores.iter().copied())
            .fold(0.0, f64::max)
    }
}
