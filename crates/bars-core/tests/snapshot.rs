// File: crates/bars-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the comparison chart (shapes only, no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else fails: a missing snapshot must be blessed, not silently skipped.

use std::num::NonZeroUsize;

use bars_core::{ComparisonChart, RenderOptions, ScoreTable};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        panic!("[snapshot] Missing {}; run with UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(segments: usize) -> Vec<u8> {
    let chart = ComparisonChart::new(ScoreTable::model_comparison().expect("valid table"));
    let mut opts = RenderOptions::with_dpi(72.0);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts.segments = NonZeroUsize::new(segments).expect("non-zero");
    chart.render_to_png_bytes(&opts, None).expect("render bytes")
}

#[test]
fn golden_comparison_chart() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/comparison.png");
    write_or_compare(&path, &render_bytes(50));
}

#[test]
fn golden_coarse_gradient() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/comparison_n5.png");
    write_or_compare(&path, &render_bytes(5));
}
