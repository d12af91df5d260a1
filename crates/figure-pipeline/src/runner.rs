// File: crates/figure-pipeline/src/runner.rs
// Summary: Variant runners; figures are produced strictly in order and the first failure ends the run.

use std::path::{Path, PathBuf};

use figure_core::Theme;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{PipelineConfig, Variant, PLOT1, PLOT2, PLOT3};
use crate::error::{PipelineError, Result};
use crate::figures::{
    render_correlation_scatter_figure, render_harmonic_wave_figure, render_random_scatter_figure,
    render_sine_wave_figure, render_skill_correlation_heatmap, WrittenFigure,
};

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub variant: Variant,
    pub out_dir: PathBuf,
    pub figures: Vec<WrittenFigure>,
}

impl RunReport {
    pub fn paths(&self) -> Vec<&Path> {
        self.figures.iter().map(|f| f.path.as_path()).collect()
    }

    pub fn total_bytes(&self) -> u64 {
        self.figures.iter().map(|f| f.bytes).sum()
    }
}

/// `plot1.png` (sine wave) and `plot2.png` (random scatter). `out_dir` must exist.
pub fn run_basic<R: Rng + ?Sized>(theme: &Theme, out_dir: &Path, rng: &mut R) -> Result<RunReport> {
    info!("basic run into {}", out_dir.display());
    let figures = vec![
        render_sine_wave_figure(theme, &out_dir.join(PLOT1))?,
        render_random_scatter_figure(theme, rng, &out_dir.join(PLOT2))?,
    ];
    Ok(RunReport { variant: Variant::Basic, out_dir: out_dir.to_path_buf(), figures })
}

/// Creates `out_dir` if needed, then writes `plot1.png`..`plot3.png`.
pub fn run_enhanced(theme: &Theme, out_dir: &Path) -> Result<RunReport> {
    std::fs::create_dir_all(out_dir)
        .map_err(|source| PipelineError::OutputDir { path: out_dir.to_path_buf(), source })?;
    info!("enhanced run into {}", out_dir.display());
    let figures = vec![
        render_harmonic_wave_figure(theme, &out_dir.join(PLOT1))?,
        render_correlation_scatter_figure(theme, &out_dir.join(PLOT2))?,
        render_skill_correlation_heatmap(theme, &out_dir.join(PLOT3))?,
    ];
    Ok(RunReport { variant: Variant::Enhanced, out_dir: out_dir.to_path_buf(), figures })
}

/// Run the configured variant with its resolved theme.
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let theme = config.resolve_theme();
    let report = match config.variant {
        Variant::Basic => {
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            };
            run_basic(&theme, &config.out_dir, &mut rng)?
        }
        Variant::Enhanced => run_enhanced(&theme, &config.out_dir)?,
    };
    info!(
        "{} run finished: {} figures, {} bytes",
        report.variant,
        report.figures.len(),
        report.total_bytes()
    );
    Ok(report)
}
