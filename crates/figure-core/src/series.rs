// File: crates/figure-core/src/series.rs
// Summary: Plot primitives (line with optional fill, scatter, histogram) and their styling.

use skia_safe as skia;

use crate::colormap::Colormap;
use crate::error::{FigureError, Result};
use crate::stats::{histogram, min_max, Histogram};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Bars rise from the x axis.
    Vertical,
    /// Bars extend from the y axis.
    Horizontal,
}

/// Which pair of panel axes a series is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    /// Secondary x (top) and secondary y (right).
    Secondary,
}

#[derive(Clone, Debug)]
pub enum SeriesKind {
    /// Polyline through `data_xy`; `fill_to` shades down (or up) to a baseline.
    Line { fill_to: Option<f64> },
    /// Circular markers; `values` colour each point through `colormap`.
    Scatter {
        radius: f32,
        values: Option<Vec<f64>>,
        colormap: Colormap,
    },
    Histogram { hist: Histogram, orientation: Orientation },
}

#[derive(Clone, Debug)]
pub struct Series {
    pub kind: SeriesKind,
    pub data_xy: Vec<(f64, f64)>, // used by Line/Scatter
    pub label: Option<String>,
    /// `None` picks from the theme palette by series index.
    pub color: Option<skia::Color>,
    pub edge_color: Option<skia::Color>,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
    pub alpha: f32,
    pub axes: AxisSide,
}

impl Series {
    fn with_kind(kind: SeriesKind, data_xy: Vec<(f64, f64)>) -> Self {
        Self {
            kind,
            data_xy,
            label: None,
            color: None,
            edge_color: None,
            width: 2.0,
            dash: None,
            alpha: 1.0,
            axes: AxisSide::Primary,
        }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_kind(SeriesKind::Line { fill_to: None }, data)
    }

    pub fn scatter(data: Vec<(f64, f64)>) -> Self {
        Self::with_kind(
            SeriesKind::Scatter { radius: 4.0, values: None, colormap: Colormap::Viridis },
            data,
        )
    }

    /// Histogram of `values` with `bins` equal-width bins.
    pub fn histogram(values: &[f64], bins: usize, orientation: Orientation) -> Result<Self> {
        let hist = histogram(values, bins)?;
        Ok(Self::with_kind(SeriesKind::Histogram { hist, orientation }, Vec::new()))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_edge_color(mut self, color: skia::Color) -> Self {
        self.edge_color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.0);
        self
    }

    /// Dash pattern as `[on, off]` pixel lengths.
    pub fn with_dash(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Shade the area between a line and `baseline`. No effect on other kinds.
    pub fn with_fill_to(mut self, baseline: f64) -> Self {
        if let SeriesKind::Line { fill_to } = &mut self.kind {
            *fill_to = Some(baseline);
        }
        self
    }

    pub fn with_radius(mut self, r: f32) -> Self {
        if let SeriesKind::Scatter { radius, .. } = &mut self.kind {
            *radius = r.max(0.5);
        }
        self
    }

    /// Colour scatter points by `values` (one per point) through `cmap`.
    pub fn with_color_values(mut self, values: Vec<f64>, cmap: Colormap) -> Result<Self> {
        if values.len() != self.data_xy.len() {
            return Err(FigureError::invalid(format!(
                "{} colour values for {} points",
                values.len(),
                self.data_xy.len()
            )));
        }
        match &mut self.kind {
            SeriesKind::Scatter { values: v, colormap, .. } => {
                *v = Some(values);
                *colormap = cmap;
                Ok(self)
            }
            _ => Err(FigureError::invalid("colour values only apply to scatter series")),
        }
    }

    pub fn on_secondary(mut self) -> Self {
        self.axes = AxisSide::Secondary;
        self
    }

    /// Resolved base colour: explicit colour or palette entry `index`.
    pub fn color_or(&self, theme: &Theme, index: usize) -> skia::Color {
        self.color.unwrap_or_else(|| theme.color(index))
    }

    /// Range of the colour values of a colour-mapped scatter.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        match &self.kind {
            SeriesKind::Scatter { values: Some(v), .. } => min_max(v),
            _ => None,
        }
    }

    /// Data extents `(x_min, x_max, y_min, y_max)` over finite points.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        match &self.kind {
            SeriesKind::Histogram { hist, orientation } => {
                let (lo, hi) = hist.range();
                let top = hist.max_count() as f64;
                Some(match orientation {
                    Orientation::Vertical => (lo, hi, 0.0, top),
                    Orientation::Horizontal => (0.0, top, lo, hi),
                })
            }
            SeriesKind::Line { fill_to } => {
                let (x0, x1, mut y0, mut y1) = xy_extents(&self.data_xy)?;
                if let Some(b) = fill_to {
                    y0 = y0.min(*b);
                    y1 = y1.max(*b);
                }
                Some((x0, x1, y0, y1))
            }
            SeriesKind::Scatter { .. } => xy_extents(&self.data_xy),
        }
    }
}

fn xy_extents(data: &[(f64, f64)]) -> Option<(f64, f64, f64, f64)> {
    let xs: Vec<f64> = data.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = data.iter().map(|p| p.1).collect();
    let (x0, x1) = min_max(&xs)?;
    let (y0, y1) = min_max(&ys)?;
    Some((x0, x1, y0, y1))
}
