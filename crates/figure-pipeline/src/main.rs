// File: crates/figure-pipeline/src/main.rs
// Summary: `plotgen` binary; renders the basic or enhanced figure set into the output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use figure_pipeline::{run, PipelineConfig, Variant, DEFAULT_OUT_DIR};
use log::{error, info};

#[derive(Parser)]
#[command(name = "plotgen")]
#[command(about = "Generate static PNG charts from synthetic data")]
struct Cli {
    /// Which figure set to render
    #[arg(long, env = "PLOTGEN_VARIANT", value_enum, default_value_t = Variant::Enhanced)]
    variant: Variant,
    /// Directory receiving plot1.png, plot2.png (and plot3.png)
    #[arg(long, env = "PLOTGEN_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Seed for the random scatter of the basic variant
    #[arg(long)]
    seed: Option<u64>,
    /// Theme preset (classic, whitegrid, dark) overriding the variant default
    #[arg(long)]
    theme: Option<String>,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn config_from(cli: &Cli) -> PipelineConfig {
    let mut config = PipelineConfig::new(cli.variant, cli.out_dir.clone());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(name) = &cli.theme {
        config = config.with_theme(name.clone());
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, wins over --log-level
    env_logger::Builder::new()
        .filter_level(cli.log_level.to_level_filter())
        .parse_default_env()
        .format_module_path(false)
        .init();

    let config = config_from(&cli);
    let report = run(&config)
        .inspect_err(|err| {
            if let Some(figure) = err.figure_name() {
                error!("stopped at figure `{figure}`");
            }
        })
        .with_context(|| format!("{} run into '{}' failed", config.variant, config.out_dir.display()))?;
    for path in report.paths() {
        info!("output: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("plotgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_and_env_overrides() {
        // PLOTGEN_* variables are only ever set inside this test.
        std::env::remove_var("PLOTGEN_VARIANT");
        std::env::remove_var("PLOTGEN_OUT_DIR");
        let cfg = config_from(&parse(&[]));
        assert_eq!(cfg.variant, Variant::Enhanced);
        assert_eq!(cfg.out_dir, PathBuf::from("../plots"));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.theme, None);

        std::env::set_var("PLOTGEN_VARIANT", "basic");
        std::env::set_var("PLOTGEN_OUT_DIR", "env_plots");
        let cfg = config_from(&parse(&[]));
        assert_eq!(cfg.variant, Variant::Basic);
        assert_eq!(cfg.out_dir, PathBuf::from("env_plots"));

        let cfg = config_from(&parse(&["--variant", "enhanced", "--out-dir", "flag_plots"]));
        assert_eq!(cfg.variant, Variant::Enhanced);
        assert_eq!(cfg.out_dir, PathBuf::from("flag_plots"));
        std::env::remove_var("PLOTGEN_VARIANT");
        std::env::remove_var("PLOTGEN_OUT_DIR");
    }

    #[test]
    fn basic_variant_with_seed_and_theme() {
        let cfg = config_from(&parse(&["--variant", "basic", "--seed", "3", "--theme", "dark"]));
        assert_eq!(cfg.variant, Variant::Basic);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.resolve_theme().name, "dark");
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["plotgen", "--variant", "fancy"]).is_err());
        assert!(Cli::try_parse_from(["plotgen", "--seed", "-1"]).is_err());
        assert!(Cli::try_parse_from(["plotgen", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn log_levels_map_to_filters() {
        let level = |name: &str| parse(&["--log-level", name]).log_level.to_level_filter();
        assert_eq!(level("error"), log::LevelFilter::Error);
        assert_eq!(level("warn"), log::LevelFilter::Warn);
        assert_eq!(level("debug"), log::LevelFilter::Debug);
        assert_eq!(level("trace"), log::LevelFilter::Trace);
        assert_eq!(parse(&[]).log_level.to_level_filter(), log::LevelFilter::Info);
    }
}
