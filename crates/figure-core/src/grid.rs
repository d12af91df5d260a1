// File: crates/figure-core/src/grid.rs
// Summary: Sample domains (linspace) and tick layout helpers.

use crate::error::{FigureError, Result};

/// `steps` evenly spaced values from `start` to `end`, both included.
/// Zero steps yields an empty vector and one step yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            // pin the endpoint so it does not drift by an ulp
            if let Some(last) = out.last_mut() {
                *last = end;
            }
            out
        }
    }
}

/// Validated [`linspace`]: rejects an empty sample count, non-finite bounds
/// and domains of zero (or negative) length.
pub fn try_linspace(start: f64, end: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(FigureError::invalid("sample count must be positive"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(FigureError::invalid(format!("domain bounds must be finite, got [{start}, {end}]")));
    }
    if end <= start {
        return Err(FigureError::invalid(format!("degenerate domain [{start}, {end}]")));
    }
    Ok(linspace(start, end, steps))
}

const TICK_STEPS: &[f64] = &[1.0, 2.0, 2.5, 5.0, 10.0];

/// Tick positions on a 1/2/2.5/5 x 10^k grid covering `[min, max]` with at
/// most roughly `max_ticks` entries.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_ticks < 2 {
        return Vec::new();
    }
    let step = nice_step(min, max, max_ticks);
    let first = (min / step).ceil() * step;
    let eps = step * 1e-9;
    let mut ticks = Vec::with_capacity(max_ticks + 1);
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + eps {
            break;
        }
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    ticks
}

/// Spacing used by [`nice_ticks`] for the same arguments.
pub fn nice_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let raw = (max - min) / (max_ticks.max(2) - 1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    TICK_STEPS
        .iter()
        .map(|s| s * magnitude)
        .find(|&s| s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude)
}

/// Format a tick value with just enough decimals for the tick spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    while decimals < 6 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            break;
        }
        decimals += 1;
    }
    let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
