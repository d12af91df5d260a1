// File: crates/figure-core/src/heatmap.rs
// Summary: Cell-grid layer coloured through a colormap, with optional per-cell value labels.

use crate::colormap::Colormap;
use crate::error::{FigureError, Result};
use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    /// Row-major cell values; row 0 is drawn at the top.
    pub values: Vec<Vec<f64>>,
    pub colormap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    /// Decimals for the in-cell labels; `None` disables them.
    pub annotate_decimals: Option<usize>,
}

impl Heatmap {
    /// Validates a non-empty rectangular grid of finite values.
    pub fn new(values: Vec<Vec<f64>>) -> Result<Self> {
        let cols = values.first().map(Vec::len).unwrap_or(0);
        if values.is_empty() || cols == 0 {
            return Err(FigureError::invalid("heatmap needs at least one cell"));
        }
        if values.iter().any(|row| row.len() != cols) {
            return Err(FigureError::invalid("heatmap rows differ in length"));
        }
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for &v in values.iter().flatten() {
            if !v.is_finite() {
                return Err(FigureError::invalid("heatmap contains non-finite values"));
            }
            vmin = vmin.min(v);
            vmax = vmax.max(v);
        }
        Ok(Self { values, colormap: Colormap::Viridis, vmin, vmax, annotate_decimals: None })
    }

    pub fn with_colormap(mut self, cmap: Colormap) -> Self {
        self.colormap = cmap;
        self
    }

    pub fn with_range(mut self, vmin: f64, vmax: f64) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    pub fn annotated(mut self, decimals: usize) -> Self {
        self.annotate_decimals = Some(decimals);
        self
    }

    pub fn rows(&self) -> usize { self.values.len() }

    pub fn cols(&self) -> usize { self.values[0].len() }

    pub fn cell_color(&self, row: usize, col: usize) -> skia::Color {
        self.colormap.map(self.values[row][col], self.vmin, self.vmax)
    }

    pub fn cell_label(&self, row: usize, col: usize) -> Option<String> {
        let d = self.annotate_decimals?;
        Some(format!("{:.*}", d, self.values[row][col]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_or_empty_grids() {
        assert!(Heatmap::new(vec![]).is_err());
        assert!(Heatmap::new(vec![vec![]]).is_err());
        assert!(Heatmap::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(Heatmap::new(vec![vec![f64::NAN]]).is_err());
    }

    #[test]
    fn range_and_labels() {
        let h = Heatmap::new(vec![vec![0.25, 1.0], vec![0.5, 0.1]]).unwrap().annotated(2);
        assert_eq!((h.vmin, h.vmax), (0.1, 1.0));
        assert_eq!((h.rows(), h.cols()), (2, 2));
        assert_eq!(h.cell_label(0, 0).as_deref(), Some("0.25"));
        assert_eq!(h.cell_label(1, 1).as_deref(), Some("0.10"));
    }
}
