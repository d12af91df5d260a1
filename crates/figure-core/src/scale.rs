// File: crates/figure-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for panel axes.

use crate::axis::Axis;
use crate::geometry::RectF;

/// Maps a value range onto a pixel interval. `px_start` is where `vmin`
/// lands, so a vertical scale has `px_start` at the bottom of the plot.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale for `axis` across the plot rect.
    pub fn horizontal(rect: &RectF, axis: &Axis) -> Self {
        if axis.inverted {
            Self::new(rect.right, rect.left, axis.min, axis.max)
        } else {
            Self::new(rect.left, rect.right, axis.min, axis.max)
        }
    }

    /// Vertical scale for `axis`; values grow upwards unless the axis is inverted.
    pub fn vertical(rect: &RectF, axis: &Axis) -> Self {
        if axis.inverted {
            Self::new(rect.top, rect.bottom, axis.min, axis.max)
        } else {
            Self::new(rect.bottom, rect.top, axis.min, axis.max)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}
