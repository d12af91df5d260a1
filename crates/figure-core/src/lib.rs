// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports the figure model, primitives and PNG rendering.

pub mod error;
pub mod figure;
pub mod panel;
pub mod series;
pub mod axis;
pub mod annotation;
pub mod heatmap;
pub mod colormap;
pub mod grid;
pub mod stats;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
mod render;

pub use error::{FigureError, Result};
pub use figure::{Figure, RenderOptions};
pub use panel::{Colorbar, LegendPosition, Panel, PanelAxes};
pub use series::{AxisSide, Orientation, Series, SeriesKind};
pub use axis::Axis;
pub use annotation::Annotation;
pub use heatmap::Heatmap;
pub use colormap::Colormap;
pub use grid::{linspace, try_linspace, nice_ticks};
pub use stats::{histogram, min_max, polyfit_linear, Histogram, LinearFit};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;

/// Re-exported so callers can name colours without depending on skia-safe directly.
pub use skia_safe::Color;
