// File: crates/figure-pipeline/src/lib.rs
// Summary: Pipeline entry point; synthetic data generation, figure operations and variant runners.

pub mod config;
pub mod data;
pub mod error;
pub mod figures;
pub mod runner;

pub use config::{PipelineConfig, Variant, DEFAULT_OUT_DIR};
pub use data::{CorrelatedSample, CorrelationMatrix, SampleSeries};
pub use error::PipelineError;
pub use figures::{
    render_correlation_scatter_figure, render_harmonic_wave_figure, render_random_scatter_figure,
    render_sine_wave_figure, render_skill_correlation_heatmap, WrittenFigure,
};
pub use runner::{run, run_basic, run_enhanced, RunReport};
