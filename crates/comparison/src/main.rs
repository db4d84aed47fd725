// File: crates/comparison/src/main.rs
// Summary: Renders the fixed model comparison chart (gradient vs hatched bars) to model_comparison.png.

use std::path::Path;

use anyhow::{Context, Result};
use bars_core::{ComparisonChart, FontSet, RenderOptions, ScoreTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FONT_DIR: &str = "gilroy-font";
const OUTPUT_PATH: &str = "model_comparison.png";

fn main() -> Result<()> {
    init_tracing();

    let fonts = FontSet::load(FONT_DIR)
        .with_context(|| format!("failed to load fonts from '{}'", FONT_DIR))?;
    info!(dir = %fonts.dir().display(), "fonts loaded");

    let table = ScoreTable::model_comparison().context("building score table")?;
    info!(
        models = table.models().len(),
        benchmarks = table.benchmarks().len(),
        "score table ready"
    );

    let chart = ComparisonChart::new(table);
    let opts = RenderOptions::default();
    let out = Path::new(OUTPUT_PATH);
    chart
        .render_to_png(&opts, Some(&fonts), out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), width = opts.width, height = opts.height, dpi = opts.dpi, "done");

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
