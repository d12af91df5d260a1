// File: crates/figure-pipeline/src/error.rs
// Summary: Pipeline error; figure failures carry the figure name and its output path.

use std::path::PathBuf;

use figure_core::FigureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("figure `{figure}` ({}) failed", path.display())]
    Figure {
        figure: &'static str,
        path: PathBuf,
        #[source]
        source: FigureError,
    },
    #[error("cannot create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn figure(figure: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(FigureError) -> Self {
        let path = path.into();
        move |source| PipelineError::Figure { figure, path, source }
    }

    /// True when the root cause is a filesystem failure.
    pub fn is_io(&self) -> bool {
        match self {
            PipelineError::Figure { source, .. } => source.is_io(),
            PipelineError::OutputDir { .. } => true,
        }
    }

    /// Name of the figure that failed, if any.
    pub fn figure_name(&self) -> Option<&'static str> {
        match self {
            PipelineError::Figure { figure, .. } => Some(figure),
            PipelineError::OutputDir { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
