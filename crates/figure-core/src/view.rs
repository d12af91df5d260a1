// File: crates/figure-core/src/view.rs
// Visible data ranges derived from series extents, with autoscale margins.

use crate::axis::Axis;
use crate::series::{Orientation, Series, SeriesKind};

/// Fraction of the data span added on each side by autoscale.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Histogram counts start at zero; margins never push below it.
    pub x_sticky_zero: bool,
    pub y_sticky_zero: bool,
}

impl ViewState {
    /// Union of the extents of `series`; `None` when nothing is plottable.
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a Series>) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut x_sticky_zero = false;
        let mut y_sticky_zero = false;
        for s in series {
            let Some((x0, x1, y0, y1)) = s.extents() else { continue };
            x_min = x_min.min(x0);
            x_max = x_max.max(x1);
            y_min = y_min.min(y0);
            y_max = y_max.max(y1);
            if let SeriesKind::Histogram { orientation, .. } = &s.kind {
                match orientation {
                    Orientation::Vertical => y_sticky_zero = true,
                    Orientation::Horizontal => x_sticky_zero = true,
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        Some(Self { x_min, x_max, y_min, y_max, x_sticky_zero, y_sticky_zero })
    }

    /// Grow the view so `(x, y)` is inside it.
    pub fn include_point(&mut self, x: f64, y: f64) {
        if x.is_finite() {
            self.x_min = self.x_min.min(x);
            self.x_max = self.x_max.max(x);
        }
        if y.is_finite() {
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
        }
    }

    /// Pad each side by `frac` of the span.
    pub fn with_margin(mut self, frac: f64) -> Self {
        let mx = (self.x_max - self.x_min) * frac;
        let my = (self.y_max - self.y_min) * frac;
        if !(self.x_sticky_zero && self.x_min == 0.0) { self.x_min -= mx; }
        self.x_max += mx;
        if !(self.y_sticky_zero && self.y_min == 0.0) { self.y_min -= my; }
        self.y_max += my;
        self
    }

    /// Copy the ranges onto axes that are not pinned.
    pub fn apply_to(&self, x: &mut Axis, y: &mut Axis) {
        self.apply_x(x);
        self.apply_y(y);
    }

    pub fn apply_x(&self, axis: &mut Axis) {
        if !axis.pinned { axis.set_range(self.x_min, self.x_max); }
    }

    pub fn apply_y(&self, axis: &mut Axis) {
        if !axis.pinned { axis.set_range(self.y_min, self.y_max); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_view() {
        assert!(ViewState::from_series(std::iter::empty()).is_none());
        let s = Series::line(vec![(f64::NAN, 1.0)]);
        assert!(ViewState::from_series([&s]).is_none());
    }

    #[test]
    fn histogram_counts_stay_at_zero() {
        let s = Series::histogram(&[1.0, 2.0, 3.0, 3.0], 3, Orientation::Vertical).unwrap();
        let v = ViewState::from_series([&s]).unwrap().with_margin(0.1);
        assert_eq!(v.y_min, 0.0);
        assert!(v.y_max > 2.0);
        assert!(v.x_min < 1.0);
    }

    #[test]
    fn pinned_axes_are_untouched() {
        let s = Series::line(vec![(0.0, 0.0), (10.0, 5.0)]);
        let v = ViewState::from_series([&s]).unwrap();
        let mut x = Axis::new("x", -1.0, 1.0);
        let mut y = Axis::auto("y");
        v.apply_to(&mut x, &mut y);
        assert_eq!((x.min, x.max), (-1.0, 1.0));
        assert_eq!((y.min, y.max), (0.0, 5.0));
    }
}
