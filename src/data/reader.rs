use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;

use super::model::{PlanetRecord, PlanetSeries};
use crate::config::{BodyEntry, PlotterConfig, TemperatureOverride};
use crate::error::{PlotterError, Result};

/// Number of columns in a body file: name, temperature, time step, distance.
const FIELD_COUNT: usize = 4;

/// How temperature and distance values are turned into series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Values as written by the simulation.
    #[default]
    Plain,
    /// Every value divided by the body's first recorded value.
    Normalized,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the data file of a configured body from the project directory.
pub fn read_body(config: &PlotterConfig, body: &BodyEntry) -> Result<PlanetSeries> {
    read_planet_file(
        &config.body_path(body),
        body.temperature_override.as_ref(),
        config.read_mode,
    )
}

/// Read one body file.
///
/// The first line is a header and is discarded. Each following line must
/// hold exactly four comma-separated fields; quoting is not supported.
/// When `temperature_override` is set the temperature column is not parsed
/// at all and the override constant for `mode` is used instead.
pub fn read_planet_file(
    path: &Path,
    temperature_override: Option<&TemperatureOverride>,
    mode: ReadMode,
) -> Result<PlanetSeries> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PlotterError::MissingFile(path.to_path_buf()),
        _ => PlotterError::io(path, e),
    })?;
    let records = parse_records(file, path, temperature_override, mode)?;
    if let Some(first) = records.first() {
        log::debug!(
            "{}: {} records of {} (time step {})",
            path.display(),
            records.len(),
            first.name,
            first.time_step
        );
    }
    Ok(PlanetSeries::from_records(records))
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn parse_records<R: Read>(
    mut source: R,
    path: &Path,
    temperature_override: Option<&TemperatureOverride>,
    mode: ReadMode,
) -> Result<Vec<PlanetRecord>> {
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .map_err(|e| PlotterError::io(path, e))?;

    // The header is always the literal first line, even when blank.
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);
    let (data, blank_line) = split_at_blank_line(body);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut temperature_baseline = None;
    let mut distance_baseline = None;
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.map_err(|source| PlotterError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // +1 for the header line.
        let line = row.position().map_or(0, |p| p.line() + 1);

        if row.len() != FIELD_COUNT {
            return Err(PlotterError::FieldCount {
                path: path.to_path_buf(),
                line,
                found: row.len(),
            });
        }

        let distance = parse_number(&row[3], path, line, "distance")?;
        let distance = scale(distance, &mut distance_baseline, mode, path, "distance")?;

        let temperature = match temperature_override {
            Some(policy) => policy.value_for(mode),
            None => {
                let value = parse_number(&row[1], path, line, "temperature")?;
                scale(value, &mut temperature_baseline, mode, path, "temperature")?
            }
        };

        records.push(PlanetRecord {
            name: row[0].to_string(),
            temperature,
            time_step: row[2].to_string(),
            distance,
            step: records.len() + 1,
        });
    }

    // csv would skip an empty line; here it is a one-field line.
    if let Some(line) = blank_line {
        return Err(PlotterError::FieldCount {
            path: path.to_path_buf(),
            line,
            found: 1,
        });
    }

    Ok(records)
}

/// Split the data lines at the first blank one. Returns the text before it
/// and that line's number in the file (header is line 1).
fn split_at_blank_line(body: &str) -> (&str, Option<u64>) {
    let mut offset = 0;
    for (i, line) in body.split_inclusive('\n').enumerate() {
        if line.trim().is_empty() {
            return (&body[..offset], Some(i as u64 + 2));
        }
        offset += line.len();
    }
    (body, None)
}

/// Apply `mode` to one value. The first value seen becomes the baseline.
fn scale(
    value: f64,
    baseline: &mut Option<f64>,
    mode: ReadMode,
    path: &Path,
    field: &'static str,
) -> Result<f64> {
    if mode == ReadMode::Plain {
        return Ok(value);
    }
    let base = match *baseline {
        Some(base) => base,
        None if value == 0.0 => {
            return Err(PlotterError::ZeroBaseline {
                path: path.to_path_buf(),
                field,
            })
        }
        None => *baseline.insert(value),
    };
    Ok(value / base)
}

fn parse_number(value: &str, path: &Path, line: u64, field: &'static str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| PlotterError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            field,
            value: value.to_string(),
        })
}
