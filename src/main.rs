mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod mover;
mod state;
mod ui;

use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::Parser;

use chart::{build_chart, ChartKind};
use color::ColorMap;
use config::PlotterConfig;
use data::reader::ReadMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect solar-system simulation exports and chart temperature and distance per body"
)]
struct Cli {
    /// JSON configuration file (missing keys use built-in defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory scanned for freshly exported files
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Directory the body files are moved to and read from
    #[arg(long, value_name = "DIR")]
    project: Option<PathBuf>,

    /// Plot every series relative to its first value
    #[arg(long)]
    normalize: bool,

    /// Do not move files from the source directory
    #[arg(long)]
    skip_move: bool,

    /// Parse and summarise the charts without opening windows
    #[arg(long)]
    headless: bool,
}

impl Cli {
    fn into_config(self) -> Result<PlotterConfig> {
        let mut config = match &self.config {
            Some(path) => PlotterConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => PlotterConfig::default(),
        };
        if let Some(source) = self.source {
            config.source_dir = source;
        }
        if let Some(project) = self.project {
            config.project_dir = project;
        }
        if self.normalize {
            config.read_mode = ReadMode::Normalized;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let skip_move = cli.skip_move;
    let headless = cli.headless;
    let config = cli.into_config()?;
    log::debug!("Configuration: {config:?}");

    if skip_move {
        log::info!("Skipping file move");
    } else {
        let moved = mover::move_recent_files(&config, SystemTime::now()).with_context(|| {
            format!(
                "moving recent exports from {} to {}",
                config.source_dir.display(),
                config.project_dir.display()
            )
        })?;
        log::info!("{} file(s) moved", moved.len());
    }

    let colors = ColorMap::new(&config.bodies);

    // The distance chart is only read once the temperature window is closed.
    for kind in [ChartKind::Temperature, ChartKind::Distance] {
        let chart = build_chart(kind, &config, &colors)
            .with_context(|| format!("building '{}' chart", kind.title()))?;

        if headless {
            log::info!("{}: {} lines", chart.title, chart.lines.len());
            for line in &chart.lines {
                log::info!("  {}: {} points", line.name, line.points.len());
            }
        } else {
            app::show_chart(chart)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "planet-plotter",
            "--source",
            "/tmp/downloads",
            "--project",
            "/tmp/plots",
            "--normalize",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.source_dir, PathBuf::from("/tmp/downloads"));
        assert_eq!(config.project_dir, PathBuf::from("/tmp/plots"));
        assert_eq!(config.read_mode, ReadMode::Normalized);
    }

    #[test]
    fn test_flags_layer_over_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plotter.json");
        std::fs::write(&path, r#"{ "project_dir": "/from/file", "max_age_secs": 60 }"#).unwrap();

        let cli = Cli::parse_from([
            "planet-plotter",
            "--config",
            path.to_str().unwrap(),
            "--skip-move",
        ]);
        assert!(cli.skip_move);
        let config = cli.into_config().unwrap();
        assert_eq!(config.project_dir, PathBuf::from("/from/file"));
        assert_eq!(config.max_age_secs, 60);
        assert_eq!(config.read_mode, ReadMode::Plain);
    }
}
