// ---------------------------------------------------------------------------
// PlanetRecord – one data line of a body file
// ---------------------------------------------------------------------------

/// A single parsed line: `name,temperature,time_step,distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub temperature: f64,
    /// Simulation time step setting at export; carried as text, never plotted.
    pub time_step: String,
    pub distance: f64,
    /// 1-based position of the line among the data lines.
    pub step: usize,
}

// ---------------------------------------------------------------------------
// PlanetSeries – the whole file, column-oriented
// ---------------------------------------------------------------------------

/// Every record of one body file, split into plottable columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetSeries {
    /// Body name from the first data line (empty if the file has no data).
    pub name: String,
    pub temperature: Vec<f64>,
    pub distance: Vec<f64>,
    /// Always `1..=N`.
    pub steps: Vec<f64>,
}

impl PlanetSeries {
    /// Collect records in file order.
    pub fn from_records(records: impl IntoIterator<Item = PlanetRecord>) -> Self {
        let mut series = PlanetSeries::default();
        for record in records {
            if series.name.is_empty() {
                series.name = record.name;
            }
            series.temperature.push(record.temperature);
            series.distance.push(record.distance);
            series.steps.push(record.step as f64);
        }
        series
    }

    /// Number of data lines.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
