// File: crates/figure-core/src/colormap.rs
// Summary: Continuous colour maps (piecewise-linear over fixed stops) for scatter colouring, heatmaps and colorbars.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Coolwarm,
}

const VIRIDIS: &[(u8, u8, u8)] = &[
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x49, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6e, 0xce, 0x58),
    (0xb5, 0xde, 0x2b),
    (0xfd, 0xe7, 0x25),
];

const COOLWARM: &[(u8, u8, u8)] = &[
    (0x3b, 0x4c, 0xc0),
    (0x67, 0x88, 0xee),
    (0x9a, 0xbb, 0xff),
    (0xc9, 0xd7, 0xf0),
    (0xed, 0xd1, 0xc2),
    (0xf7, 0xa8, 0x89),
    (0xe2, 0x69, 0x52),
    (0xb4, 0x04, 0x26),
];

impl Colormap {
    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Coolwarm => COOLWARM,
        }
    }

    /// Colour at normalized position `t`; out-of-range and NaN clamp to the ends.
    pub fn sample(&self, t: f64) -> skia::Color {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - i as f64;
        let (r0, g0, b0) = stops[i];
        let (r1, g1, b1) = stops[i + 1];
        let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
        skia::Color::from_argb(255, lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Colour for `v` within `[vmin, vmax]`.
    pub fn map(&self, v: f64, vmin: f64, vmax: f64) -> skia::Color {
        let span = vmax - vmin;
        if span.abs() < 1e-12 {
            return self.sample(0.5);
        }
        self.sample((v - vmin) / span)
    }
}

/// Perceived brightness in [0, 1]; used to pick readable text over a fill.
pub fn luminance(c: skia::Color) -> f64 {
    (0.299 * c.r() as f64 + 0.587 * c.g() as f64 + 0.114 * c.b() as f64) / 255.0
}

/// Dark or light text, whichever contrasts with `fill`.
pub fn contrast_text(fill: skia::Color) -> skia::Color {
    if luminance(fill) > 0.5 {
        skia::Color::from_argb(255, 0x26, 0x26, 0x26)
    } else {
        skia::Color::from_argb(255, 255, 255, 255)
    }
}
