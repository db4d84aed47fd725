// File: crates/bars-core/src/layout.rs
// Summary: Grouped bar placement in data units.

/// Width and gap of the bars inside one benchmark group, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupLayout {
    pub bar_width: f64,
    pub spacing: f64,
}

impl Default for GroupLayout {
    fn default() -> Self {
        Self { bar_width: 0.12, spacing: 0.02 }
    }
}

impl GroupLayout {
    /// Center of model `model`'s bar (of `models` bars) in the group centered at `group_x`.
    pub fn bar_center(&self, group_x: f64, model: usize, models: usize) -> f64 {
        let offset = model as f64 - (models as f64 - 1.0) / 2.0;
        group_x + offset * (self.bar_width + self.spacing)
    }

    /// Left edge of the same bar.
    pub fn bar_left(&self, group_x: f64, model: usize, models: usize) -> f64 {
        self.bar_center(group_x, model, models) - self.bar_width / 2.0
    }
}
