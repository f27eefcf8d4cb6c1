use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while moving, reading or configuring planet data.
#[derive(Debug, Error)]
pub enum PlotterError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("planet file not found: {0}")]
    MissingFile(PathBuf),

    #[error("{path}, line {line}: expected 4 comma-separated fields, found {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("{path}, line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("{path}: first {field} value is zero, cannot normalize")]
    ZeroBaseline { path: PathBuf, field: &'static str },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PlotterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotterError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotterError>;
