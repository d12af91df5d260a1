// File: crates/figure-core/src/stats.rs
// Summary: Numeric helpers behind the primitives: extents, histogram binning, least-squares line fit.

use crate::error::{FigureError, Result};
use crate::grid::linspace;

/// Minimum and maximum of the finite values in `values`.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Equal-width histogram of a sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bins(&self) -> usize { self.counts.len() }

    pub fn total(&self) -> usize { self.counts.iter().sum() }

    pub fn max_count(&self) -> usize { self.counts.iter().copied().max().unwrap_or(0) }

    /// `(lower edge, upper edge, count)` per bin.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(w, &c)| (w[0], w[1], c))
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
}

/// Bin `values` into `bins` equal-width bins spanning the sample range.
/// The last bin is closed on the right. A constant sample is binned over
/// `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(FigureError::invalid("histogram needs at least one bin"));
    }
    if values.is_empty() {
        return Err(FigureError::invalid("histogram of an empty sample"));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(FigureError::invalid("histogram sample contains non-finite values"));
    }
    let (mut lo, mut hi) = min_max(values).ok_or_else(|| FigureError::invalid("empty sample"))?;
    if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }
    let edges = linspace(lo, hi, bins + 1);
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Ok(Histogram { edges, counts })
}

/// `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares degree-1 polynomial fit.
pub fn polyfit_linear(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() != ys.len() {
        return Err(FigureError::invalid(format!(
            "fit needs paired samples, got {} x and {} y",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(FigureError::invalid("fit needs at least two points"));
    }
    if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
        return Err(FigureError::invalid("fit sample contains non-finite values"));
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (mut sxx, mut sxy) = (0.0f64, 0.0f64);
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if sxx <= f64::EPSILON * n {
        return Err(FigureError::invalid("fit needs x values with non-zero variance"));
    }
    let slope = sxy / sxx;
    Ok(LinearFit { slope, intercept: mean_y - slope * mean_x })
}
