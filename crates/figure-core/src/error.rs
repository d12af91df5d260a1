// File: crates/figure-core/src/error.rs
// Summary: Error type shared by figure construction, numeric helpers and PNG output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigureError {
    /// Writing an output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input that cannot be plotted (empty, non-finite, degenerate).
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    Readback,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("panel index {index} out of range (figure has {count} panels)")]
    Layout { index: usize, count: usize },
}

impl FigureError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FigureError::InvalidData(msg.into())
    }

    pub fn is_io(&self) -> bool {
        matches!(self, FigureError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;
