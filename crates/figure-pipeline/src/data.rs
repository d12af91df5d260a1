// File: crates/figure-pipeline/src/data.rs
// Summary: Synthetic data: closed-form series over linear domains, random draws and the skill matrix.

use std::f64::consts::PI;

use figure_core::{try_linspace, FigureError, Result};
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

pub const HARMONIC_SAMPLES: usize = 1000;
pub const SINE_SAMPLES: usize = 100;
pub const SCATTER_POINTS: usize = 50;
pub const CORRELATED_POINTS: usize = 200;

pub const SKILLS: [&str; 5] = ["Python", "Machine Learning", "Data Analysis", "Statistics", "Visualization"];

/// Ordered `(x, y)` samples backing one primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampleSeries {
    /// Evaluate `f` at `count` evenly spaced points of `[start, end]`.
    pub fn from_fn(start: f64, end: f64, count: usize, f: impl Fn(f64) -> f64) -> Result<Self> {
        let xs = try_linspace(start, end, count)?;
        let ys = xs.iter().map(|&x| f(x)).collect();
        Ok(Self { xs, ys })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}

/// sin(x), 0.5·sin(2x) and 1.5·sin(x/2) over `[0, 4π]`.
pub fn harmonic_series() -> Result<[SampleSeries; 3]> {
    let end = 4.0 * PI;
    Ok([
        SampleSeries::from_fn(0.0, end, HARMONIC_SAMPLES, f64::sin)?,
        SampleSeries::from_fn(0.0, end, HARMONIC_SAMPLES, |x| 0.5 * (2.0 * x).sin())?,
        SampleSeries::from_fn(0.0, end, HARMONIC_SAMPLES, |x| 1.5 * (x / 2.0).sin())?,
    ])
}

/// sin(x) on `[0, 10]`, 100 samples.
pub fn sine_wave() -> Result<SampleSeries> {
    SampleSeries::from_fn(0.0, 10.0, SINE_SAMPLES, f64::sin)
}

fn require_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(FigureError::invalid("sample count must be positive"));
    }
    Ok(())
}

/// `count` draws from Uniform[0, 1).
pub fn uniform_samples<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<f64>> {
    require_count(count)?;
    let dist = Uniform::new(0.0, 1.0).map_err(|e| FigureError::invalid(e.to_string()))?;
    Ok(dist.sample_iter(rng).take(count).collect())
}

/// `count` draws from Normal(mean, std_dev).
pub fn normal_samples<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64, count: usize) -> Result<Vec<f64>> {
    require_count(count)?;
    let dist = Normal::new(mean, std_dev).map_err(|e| FigureError::invalid(e.to_string()))?;
    Ok(dist.sample_iter(rng).take(count).collect())
}

/// Points with both coordinates uniform on [0, 1); all x are drawn before any y.
pub fn uniform_points<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<SampleSeries> {
    let xs = uniform_samples(rng, count)?;
    let ys = uniform_samples(rng, count)?;
    Ok(SampleSeries { xs, ys })
}

/// X ~ N(50, 15), Y = 2X + 30 + N(0, 10), colour value X + Y.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelatedSample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Vec<f64>,
}

impl CorrelatedSample {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Self> {
        let x = normal_samples(rng, 50.0, 15.0, count)?;
        let noise = normal_samples(rng, 0.0, 10.0, count)?;
        let y: Vec<f64> = x.iter().zip(&noise).map(|(x, n)| 2.0 * x + 30.0 + n).collect();
        let color = x.iter().zip(&y).map(|(x, y)| x + y).collect();
        Ok(Self { x, y, color })
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Symmetric 5x5 matrix with unit diagonal, one row/column per entry of [`SKILLS`].
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 5],
    pub values: [[f64; 5]; 5],
}

impl CorrelationMatrix {
    /// Uniform [0, 1) draws in row-major order, averaged with the transpose, diagonal set to 1.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut raw = [[0.0f64; 5]; 5];
        for row in raw.iter_mut() {
            for v in row.iter_mut() {
                *v = rng.random::<f64>();
            }
        }
        let mut values = [[0.0f64; 5]; 5];
        for (i, row) in values.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = if i == j { 1.0 } else { (raw[i][j] + raw[j][i]) / 2.0 };
            }
        }
        debug!("skill matrix: {values:?}");
        Self { labels: SKILLS, values }
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values.iter().map(|r| r.to_vec()).collect()
    }
}
