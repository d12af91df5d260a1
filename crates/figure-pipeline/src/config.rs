// File: crates/figure-pipeline/src/config.rs
// Summary: Run configuration: variant, output directory, RNG seed and style resolution.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use figure_core::{theme, Theme};
use log::warn;

/// Output directory used when none is given. Resolved against the working
/// directory, so running from `scripts/` writes into a sibling `plots/`.
pub const DEFAULT_OUT_DIR: &str = "../plots";

pub const PLOT1: &str = "plot1.png";
pub const PLOT2: &str = "plot2.png";
pub const PLOT3: &str = "plot3.png";

/// Which set of figures a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Sine wave and random scatter (`plot1.png`, `plot2.png`).
    Basic,
    /// Harmonic waves, correlation scatter and skill heatmap (`plot1.png`..`plot3.png`).
    #[default]
    Enhanced,
}

impl Variant {
    pub fn file_names(self) -> &'static [&'static str] {
        match self {
            Variant::Basic => &[PLOT1, PLOT2],
            Variant::Enhanced => &[PLOT1, PLOT2, PLOT3],
        }
    }

    pub fn default_theme(self) -> Theme {
        match self {
            Variant::Basic => Theme::classic(),
            Variant::Enhanced => Theme::whitegrid(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Basic => "basic",
            Variant::Enhanced => "enhanced",
        })
    }
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub variant: Variant,
    pub out_dir: PathBuf,
    /// Seed for the basic scatter RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Theme preset name overriding the variant default.
    pub theme: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            seed: None,
            theme: None,
        }
    }
}

impl PipelineConfig {
    pub fn new(variant: Variant, out_dir: impl Into<PathBuf>) -> Self {
        Self { variant, out_dir: out_dir.into(), ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    /// The style for this run. Unknown names fall back to the variant default.
    pub fn resolve_theme(&self) -> Theme {
        match self.theme.as_deref() {
            None => self.variant.default_theme(),
            Some(name) => theme::find(name).unwrap_or_else(|| {
                let fallback = self.variant.default_theme();
                warn!("unknown theme '{name}', using '{}'", fallback.name);
                fallback
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_script() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.variant, Variant::Enhanced);
        assert_eq!(cfg.out_dir, PathBuf::from("../plots"));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.resolve_theme().name, "whitegrid");
    }

    #[test]
    fn theme_override_and_fallback() {
        let cfg = PipelineConfig::new(Variant::Basic, "out").with_theme("DARK");
        assert_eq!(cfg.resolve_theme().name, "dark");
        let cfg = PipelineConfig::new(Variant::Basic, "out").with_theme("sepia");
        assert_eq!(cfg.resolve_theme().name, "classic");
    }

    #[test]
    fn variant_file_names() {
        assert_eq!(Variant::Basic.file_names(), &["plot1.png", "plot2.png"]);
        assert_eq!(Variant::Enhanced.file_names().len(), 3);
        assert_eq!(Variant::Enhanced.to_string(), "enhanced");
    }
}
