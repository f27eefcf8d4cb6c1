//! Plotter configuration.
//!
//! Every field has a default matching the solar-system simulation's export
//! set, so an empty JSON object (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::reader::ReadMode;
use crate::error::{PlotterError, Result};

/// Files older than this are left in the source directory.
pub const DEFAULT_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Constant temperature substituted for a body whose exported temperature
/// column carries no usable value (stars export the text `staticTemp`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperatureOverride {
    /// Used when reading raw values.
    pub plain: f64,
    /// Used when reading baseline-normalized values.
    pub normalized: f64,
}

impl TemperatureOverride {
    pub fn value_for(&self, mode: ReadMode) -> f64 {
        match mode {
            ReadMode::Plain => self.plain,
            ReadMode::Normalized => self.normalized,
        }
    }
}

/// One plotted body: its data file and how to draw it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyEntry {
    /// File name relative to the project directory, e.g. `Earth.txt`.
    pub file: String,
    /// Color name (CSS / matplotlib style), e.g. `green`.
    pub color: String,
    #[serde(default)]
    pub temperature_override: Option<TemperatureOverride>,
}

impl BodyEntry {
    fn new(file: &str, color: &str) -> Self {
        BodyEntry {
            file: file.to_string(),
            color: color.to_string(),
            temperature_override: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Where the simulation drops its exports.
    pub source_dir: PathBuf,
    /// Where body files are collected and read from.
    pub project_dir: PathBuf,
    /// Only files ending with this suffix are moved.
    pub extension: String,
    /// Maximum age, in seconds, of a file that still gets moved.
    pub max_age_secs: u64,
    pub read_mode: ReadMode,
    /// Plotted bodies, in legend order.
    pub bodies: Vec<BodyEntry>,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        let mut brown_dwarf = BodyEntry::new("Brown Dwarf.txt", "brown");
        brown_dwarf.temperature_override = Some(TemperatureOverride {
            plain: 1000.0,
            normalized: 2.0,
        });

        Self {
            source_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            project_dir: PathBuf::from("."),
            extension: ".txt".to_string(),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            read_mode: ReadMode::Plain,
            bodies: vec![
                BodyEntry::new("Mercury.txt", "yellow"),
                BodyEntry::new("Venus.txt", "orange"),
                BodyEntry::new("Earth.txt", "green"),
                BodyEntry::new("Mars.txt", "red"),
                BodyEntry::new("Jupiter.txt", "purple"),
                BodyEntry::new("Saturn.txt", "grey"),
                BodyEntry::new("Uranus.txt", "black"),
                BodyEntry::new("Neptune.txt", "blue"),
                BodyEntry::new("Pluto.txt", "magenta"),
                brown_dwarf,
            ],
        }
    }
}

impl PlotterConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PlotterError::io(path, e))?;
        Self::from_json(&text).map_err(|source| PlotterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Full path of a body's data file.
    pub fn body_path(&self, body: &BodyEntry) -> PathBuf {
        self.project_dir.join(&body.file)
    }
}
