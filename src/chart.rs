use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::config::PlotterConfig;
use crate::data::model::PlanetSeries;
use crate::data::reader::{read_body, ReadMode};
use crate::error::Result;

/// Which series a chart plots against the step index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Temperature,
    Distance,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Temperature => "Temperature of Planets",
            ChartKind::Distance => "Distance to Sun",
        }
    }

    pub fn y_label(self, mode: ReadMode) -> &'static str {
        match (self, mode) {
            (ChartKind::Temperature, ReadMode::Plain) => "Temperature (°F)",
            (ChartKind::Distance, ReadMode::Plain) => "Distance to Sun",
            (ChartKind::Temperature, ReadMode::Normalized) => "Relative temperature",
            (ChartKind::Distance, ReadMode::Normalized) => "Relative distance",
        }
    }

    fn values(self, series: &PlanetSeries) -> &[f64] {
        match self {
            ChartKind::Temperature => &series.temperature,
            ChartKind::Distance => &series.distance,
        }
    }
}

/// One body's line.
#[derive(Debug, Clone)]
pub struct ChartLine {
    /// Legend label, the body name from the file.
    pub name: String,
    pub color: Color32,
    /// `[step, value]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw one chart window.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// In configuration order.
    pub lines: Vec<ChartLine>,
}

impl Chart {
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|l| l.points.len()).sum()
    }
}

/// Read every configured body and assemble the chart for `kind`.
/// The first unreadable body file aborts the whole chart.
pub fn build_chart(kind: ChartKind, config: &PlotterConfig, colors: &ColorMap) -> Result<Chart> {
    let mut lines = Vec::with_capacity(config.bodies.len());
    for body in &config.bodies {
        let series = read_body(config, body)?;
        if series.is_empty() {
            log::warn!("{} has no data lines", body.file);
        } else {
            log::debug!("{}: {} points from {}", series.name, series.len(), body.file);
        }
        let points = series
            .steps
            .iter()
            .zip(kind.values(&series))
            .map(|(&step, &value)| [step, value])
            .collect();
        lines.push(ChartLine {
            name: series.name,
            color: colors.color_for(&body.file),
            points,
        });
    }

    Ok(Chart {
        title: kind.title().to_string(),
        x_label: "Step".to_string(),
        y_label: kind.y_label(config.read_mode).to_string(),
        lines,
    })
}
