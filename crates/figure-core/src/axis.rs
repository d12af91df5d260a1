// File: crates/figure-core/src/axis.rs
// Summary: Axis model with label, range, tick styling and optional category labels.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Range was set explicitly; autoscale leaves it alone.
    pub pinned: bool,
    /// Values grow towards the top/left instead of bottom/right.
    pub inverted: bool,
    /// Counter-clockwise tick label rotation in degrees.
    pub tick_rotation: f32,
    /// Category labels, one per unit cell; ticks sit at cell centres.
    pub categories: Option<Vec<String>>,
}

impl Axis {
    /// Axis with a fixed range.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            pinned: true,
            inverted: false,
            tick_rotation: 0.0,
            categories: None,
        }
    }

    /// Axis whose range follows the plotted data.
    pub fn auto(label: impl Into<String>) -> Self {
        let mut a = Self::new(label, 0.0, 1.0);
        a.pinned = false;
        a
    }

    /// Categorical axis over `[0, n]`, one unit cell per label.
    pub fn categorical<S: Into<String>>(label: impl Into<String>, categories: impl IntoIterator<Item = S>) -> Self {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let mut a = Self::new(label, 0.0, categories.len().max(1) as f64);
        a.categories = Some(categories);
        a
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.set_range(min, max);
        self.pinned = true;
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::auto("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_axis_spans_one_cell_per_label() {
        let a = Axis::categorical("skills", ["a", "b", "c"]);
        assert_eq!((a.min, a.max), (0.0, 3.0));
        assert!(a.pinned);
        assert_eq!(a.categories.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn auto_axis_is_not_pinned() {
        let a = Axis::auto("x");
        assert!(!a.pinned);
        assert!(a.clone().with_range(1.0, 2.0).pinned);
    }
}
