// File: crates/bars-core/src/axis.rs
// Summary: Axis model with limits and explicit tick positions/labels.

use crate::grid::{tick_label, ticks};

#[derive(Clone, Debug)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    /// (position, label) pairs; empty means no ticks.
    pub ticks: Vec<(f64, String)>,
}

impl Axis {
    /// Category axis: one tick per name at 0, 1, 2, ... with limits padded around them.
    pub fn categories<S: AsRef<str>>(names: &[S], pad_lo: f64, pad_hi: f64) -> Self {
        let n = names.len() as f64;
        let ticks = names
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.as_ref().to_string()))
            .collect();
        Self { min: -pad_lo, max: n - pad_hi, ticks }
    }

    /// Value axis with evenly stepped numeric ticks.
    pub fn stepped(min: f64, max: f64, tick_start: f64, tick_end: f64, step: f64) -> Self {
        let ticks = ticks(tick_start, tick_end, step)
            .into_iter()
            .map(|v| (v, tick_label(v)))
            .collect();
        Self { min, max, ticks }
    }
}
