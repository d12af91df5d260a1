// File: crates/figure-pipeline/src/figures.rs
// Summary: The figure operations: build each chart from fresh data, then persist it to one PNG path.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use figure_core::{
    polyfit_linear, Annotation, Axis, Color, Colormap, Figure, Heatmap, LegendPosition, LinearFit, Orientation,
    RenderOptions, Series, Theme,
};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::data::{
    harmonic_series, sine_wave, uniform_points, CorrelatedSample, CorrelationMatrix, CORRELATED_POINTS,
    SCATTER_POINTS,
};
use crate::error::{PipelineError, Result};

pub const HARMONIC_WAVE: &str = "harmonic_wave";
pub const CORRELATION_SCATTER: &str = "correlation_scatter";
pub const SKILL_HEATMAP: &str = "skill_heatmap";
pub const SINE_WAVE: &str = "sine_wave";
pub const RANDOM_SCATTER: &str = "random_scatter";

pub const SCATTER_SEED: u64 = 42;
pub const HEATMAP_SEED: u64 = 123;

const HIST_BINS: usize = 20;
const ORANGE: Color = Color::from_rgb(255, 165, 0);

/// One persisted figure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFigure {
    pub name: &'static str,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Write `figure` to `path`; the figure (and its surface) is gone afterwards either way.
fn persist(figure: Figure, name: &'static str, path: &Path) -> Result<WrittenFigure> {
    let bytes = figure.save_png(path).map_err(PipelineError::figure(name, path))?;
    info!("wrote {name} to {} ({bytes} bytes)", path.display());
    Ok(WrittenFigure { name, path: path.to_path_buf(), bytes })
}

/// Legend label of the least-squares line.
pub fn fit_label(fit: &LinearFit) -> String {
    format!("Fit: y = {:.2}x + {:.2}", fit.slope, fit.intercept)
}

pub fn build_harmonic_wave_figure(theme: &Theme) -> figure_core::Result<Figure> {
    let [base, double, half] = harmonic_series()?;
    let mut fig = Figure::new(RenderOptions::sized(1200, 600), *theme);
    let p = fig.panel_mut(0)?;
    p.set_title("Harmonic Waves")
        .set_x_axis(Axis::new("x (radians)", 0.0, 4.0 * PI))
        .set_y_axis(Axis::auto("Amplitude"));
    p.add_series(Series::line(base.points()).with_label("sin(x)").with_fill_to(0.0).with_width(2.5))
        .add_series(Series::line(double.points()).with_label("0.5 sin(2x)").with_width(2.0))
        .add_series(Series::line(half.points()).with_label("1.5 sin(x/2)").with_width(2.0).with_dash(8.0, 4.0));
    p.annotate(Annotation::arrow("First peak", (PI / 2.0 + 1.2, 1.7), (PI / 2.0, 1.0)))
        .show_legend(LegendPosition::UpperRight);
    Ok(fig)
}

pub fn render_harmonic_wave_figure(theme: &Theme, path: &Path) -> Result<WrittenFigure> {
    let fig = build_harmonic_wave_figure(theme).map_err(PipelineError::figure(HARMONIC_WAVE, path))?;
    persist(fig, HARMONIC_WAVE, path)
}

/// Left: colour-mapped scatter with its fit line. Right: marginal histograms of X and Y.
pub fn build_correlation_scatter_figure(theme: &Theme, sample: &CorrelatedSample) -> figure_core::Result<(Figure, LinearFit)> {
    let fit = polyfit_linear(&sample.x, &sample.y)?;
    debug!("least-squares fit: slope={} intercept={}", fit.slope, fit.intercept);

    let mut fig = Figure::subplots(RenderOptions::sized(1400, 600), *theme, 1, 2)?;
    fig.set_suptitle("Correlated Variables");

    let scatter = Series::scatter(sample.points())
        .with_color_values(sample.color.clone(), Colormap::Viridis)?
        .with_radius(4.5)
        .with_alpha(0.8)
        .with_edge_color(Color::WHITE)
        .with_label("Samples");
    let (vmin, vmax) = scatter.value_range().unwrap_or((0.0, 1.0));
    let (x_lo, x_hi) = figure_core::min_max(&sample.x).unwrap_or((0.0, 1.0));
    let fit_line = Series::line(vec![(x_lo, fit.eval(x_lo)), (x_hi, fit.eval(x_hi))])
        .with_label(fit_label(&fit))
        .with_color(Color::from_rgb(214, 39, 40))
        .with_width(2.0)
        .with_dash(8.0, 5.0);

    let left = fig.panel_mut(0)?;
    left.set_title("Scatter with Linear Fit")
        .set_x_axis(Axis::auto("X"))
        .set_y_axis(Axis::auto("Y"));
    left.add_series(scatter)
        .add_series(fit_line)
        .set_colorbar(Colormap::Viridis, vmin, vmax, "X + Y")
        .show_legend(LegendPosition::UpperLeft);

    let x_hist = Series::histogram(&sample.x, HIST_BINS, Orientation::Vertical)?
        .with_alpha(0.7)
        .with_edge_color(Color::BLACK)
        .with_label("X distribution");
    let y_hist = Series::histogram(&sample.y, HIST_BINS, Orientation::Horizontal)?
        .with_alpha(0.7)
        .with_edge_color(Color::BLACK)
        .with_label("Y distribution")
        .on_secondary();

    let right = fig.panel_mut(1)?;
    right.set_title("Distributions")
        .set_x_axis(Axis::auto("X value"))
        .set_y_axis(Axis::auto("Frequency"));
    right.add_series(x_hist).add_series(y_hist);
    right.secondary_x = Some(Axis::auto("Y frequency"));
    right.secondary_y = Some(Axis::auto("Y value"));
    right.show_legend(LegendPosition::UpperRight);
    Ok((fig, fit))
}

pub fn render_correlation_scatter_figure(theme: &Theme, path: &Path) -> Result<WrittenFigure> {
    let mut rng = ChaCha8Rng::seed_from_u64(SCATTER_SEED);
    let fig = CorrelatedSample::generate(&mut rng, CORRELATED_POINTS)
        .and_then(|sample| build_correlation_scatter_figure(theme, &sample))
        .map(|(fig, _)| fig)
        .map_err(PipelineError::figure(CORRELATION_SCATTER, path))?;
    persist(fig, CORRELATION_SCATTER, path)
}

pub fn build_skill_correlation_heatmap(theme: &Theme, matrix: &CorrelationMatrix) -> figure_core::Result<Figure> {
    let heatmap = Heatmap::new(matrix.rows())?
        .with_colormap(Colormap::Coolwarm)
        .with_range(0.0, 1.0)
        .annotated(2);
    let mut fig = Figure::new(RenderOptions::sized(1000, 800), *theme);
    let p = fig.panel_mut(0)?;
    p.set_title("Skill Correlation Matrix")
        .set_x_axis(Axis::auto("").with_tick_rotation(45.0))
        .set_y_axis(Axis::auto("").with_tick_rotation(0.0));
    p.set_heatmap(heatmap, matrix.labels, matrix.labels)
        .set_colorbar(Colormap::Coolwarm, 0.0, 1.0, "Correlation");
    Ok(fig)
}

pub fn render_skill_correlation_heatmap(theme: &Theme, path: &Path) -> Result<WrittenFigure> {
    let matrix = CorrelationMatrix::generate(&mut ChaCha8Rng::seed_from_u64(HEATMAP_SEED));
    let fig = build_skill_correlation_heatmap(theme, &matrix).map_err(PipelineError::figure(SKILL_HEATMAP, path))?;
    persist(fig, SKILL_HEATMAP, path)
}

pub fn build_sine_wave_figure(theme: &Theme) -> figure_core::Result<Figure> {
    let wave = sine_wave()?;
    let mut fig = Figure::new(RenderOptions::sized(640, 480), *theme);
    let p = fig.panel_mut(0)?;
    p.set_title("Sine Wave").set_x_axis(Axis::auto("x")).set_y_axis(Axis::auto("sin(x)"));
    p.add_series(Series::line(wave.points()).with_width(1.5));
    Ok(fig)
}

pub fn render_sine_wave_figure(theme: &Theme, path: &Path) -> Result<WrittenFigure> {
    let fig = build_sine_wave_figure(theme).map_err(PipelineError::figure(SINE_WAVE, path))?;
    persist(fig, SINE_WAVE, path)
}

pub fn build_random_scatter_figure<R: Rng + ?Sized>(theme: &Theme, rng: &mut R) -> figure_core::Result<Figure> {
    let points = uniform_points(rng, SCATTER_POINTS)?;
    let mut fig = Figure::new(RenderOptions::sized(640, 480), *theme);
    let p = fig.panel_mut(0)?;
    p.set_title("Random Scatter Plot").set_x_axis(Axis::auto("x")).set_y_axis(Axis::auto("y"));
    p.add_series(Series::scatter(points.points()).with_color(ORANGE).with_radius(3.5));
    Ok(fig)
}

pub fn render_random_scatter_figure<R: Rng + ?Sized>(theme: &Theme, rng: &mut R, path: &Path) -> Result<WrittenFigure> {
    let fig = build_random_scatter_figure(theme, rng).map_err(PipelineError::figure(RANDOM_SCATTER, path))?;
    persist(fig, RANDOM_SCATTER, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_core::SeriesKind;

    fn correlated() -> CorrelatedSample {
        CorrelatedSample::generate(&mut ChaCha8Rng::seed_from_u64(SCATTER_SEED), CORRELATED_POINTS).unwrap()
    }

    #[test]
    fn fit_is_reproducible_and_close_to_the_model() {
        let theme = Theme::whitegrid();
        let (_, a) = build_correlation_scatter_figure(&theme, &correlated()).unwrap();
        let (_, b) = build_correlation_scatter_figure(&theme, &correlated()).unwrap();
        assert_eq!(fit_label(&a), fit_label(&b));
        assert!((a.slope - 2.0).abs() < 0.3, "slope {}", a.slope);
        assert!((a.intercept - 30.0).abs() < 15.0, "intercept {}", a.intercept);
    }

    #[test]
    fn fit_label_uses_two_decimals() {
        let fit = LinearFit { slope: 1.996, intercept: 30.5 };
        assert_eq!(fit_label(&fit), "Fit: y = 2.00x + 30.50");
    }

    #[test]
    fn scatter_figure_layout() {
        let (fig, fit) = build_correlation_scatter_figure(&Theme::whitegrid(), &correlated()).unwrap();
        assert_eq!(fig.grid(), (1, 2));
        let left = fig.panel(0).unwrap();
        assert!(left.colorbar.is_some());
        assert_eq!(left.series[1].label.as_deref(), Some(fit_label(&fit).as_str()));
        assert!(left.series[1].dash.is_some());
        let right = fig.panel(1).unwrap();
        assert_eq!(right.secondary_series().count(), 1);
        let total: usize = right
            .series
            .iter()
            .map(|s| match &s.kind {
                SeriesKind::Histogram { hist, .. } => hist.total(),
                _ => 0,
            })
            .sum();
        assert_eq!(total, 2 * CORRELATED_POINTS);
    }

    #[test]
    fn harmonic_figure_has_three_lines_and_a_callout() {
        let fig = build_harmonic_wave_figure(&Theme::whitegrid()).unwrap();
        let p = fig.panel(0).unwrap();
        assert_eq!(p.series.len(), 3);
        assert!(matches!(p.series[0].kind, SeriesKind::Line { fill_to: Some(_) }));
        assert!(matches!(p.series[1].kind, SeriesKind::Line { fill_to: None }));
        assert_eq!(p.annotations.len(), 1);
        assert_eq!(p.annotations[0].anchors()[1], (PI / 2.0, 1.0));
        assert_eq!(p.legend_entries().count(), 3);
    }

    #[test]
    fn heatmap_axes_and_labels() {
        let matrix = CorrelationMatrix::generate(&mut ChaCha8Rng::seed_from_u64(HEATMAP_SEED));
        let fig = build_skill_correlation_heatmap(&Theme::whitegrid(), &matrix).unwrap();
        let p = fig.panel(0).unwrap();
        assert_eq!(p.x_axis.tick_rotation, 45.0);
        assert_eq!(p.y_axis.tick_rotation, 0.0);
        assert_eq!(p.x_axis.categories.as_ref().map(Vec::len), Some(5));
        let hm = p.heatmap.as_ref().unwrap();
        assert_eq!(hm.cell_label(0, 0).as_deref(), Some("1.00"));
    }

    #[test]
    fn figures_carry_the_run_theme() {
        let theme = Theme::dark();
        assert_eq!(build_sine_wave_figure(&theme).unwrap().theme.name, "dark");
        assert_eq!(build_harmonic_wave_figure(&theme).unwrap().theme.background, theme.background);
        let (fig, _) = build_correlation_scatter_figure(&theme, &correlated()).unwrap();
        assert_eq!(fig.theme.name, "dark");
    }

    #[test]
    fn random_scatter_depends_only_on_the_rng() {
        let theme = Theme::classic();
        let a = build_random_scatter_figure(&theme, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = build_random_scatter_figure(&theme, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a.panel(0).unwrap().series[0].data_xy, b.panel(0).unwrap().series[0].data_xy);
        assert_eq!(a.panel(0).unwrap().series[0].data_xy.len(), SCATTER_POINTS);
    }
}
