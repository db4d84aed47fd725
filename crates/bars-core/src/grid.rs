// File: crates/bars-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Evenly spaced ticks from `start` to `end` inclusive, stepping by `step`.
pub fn ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start { return vec![start]; }
    let n = ((end - start) / step + 1e-9).floor() as usize;
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Tick label without a trailing `.0` for whole numbers.
pub fn tick_label(v: f64) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{v}") }
}
