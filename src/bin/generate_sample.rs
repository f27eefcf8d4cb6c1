use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Solar luminosity in watts.
const SUN_LUMINOSITY: f64 = 3.828e26;
const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;
const AU_METRES: f64 = 1.495978707e11;

/// Time-step setting recorded in every exported line.
const TIME_STEP: f64 = 1.0;

#[derive(Parser, Debug)]
#[command(about = "Write synthetic body files in the simulation's export format")]
struct Args {
    /// Output directory (created if missing)
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of data lines per file
    #[arg(long, default_value_t = 365)]
    steps: usize,
}

/// Orbital elements of a sample planet: semi-major axis (AU), eccentricity,
/// period (days) and Bond albedo.
struct Orbit {
    name: &'static str,
    semi_major_au: f64,
    eccentricity: f64,
    period_days: f64,
    albedo: f64,
}

const PLANETS: [Orbit; 9] = [
    Orbit {
        name: "Mercury",
        semi_major_au: 0.387,
        eccentricity: 0.206,
        period_days: 88.0,
        albedo: 0.088,
    },
    Orbit {
        name: "Venus",
        semi_major_au: 0.723,
        eccentricity: 0.007,
        period_days: 224.7,
        albedo: 0.76,
    },
    Orbit {
        name: "Earth",
        semi_major_au: 1.0,
        eccentricity: 0.017,
        period_days: 365.25,
        albedo: 0.306,
    },
    Orbit {
        name: "Mars",
        semi_major_au: 1.524,
        eccentricity: 0.093,
        period_days: 687.0,
        albedo: 0.25,
    },
    Orbit {
        name: "Jupiter",
        semi_major_au: 5.203,
        eccentricity: 0.048,
        period_days: 4331.0,
        albedo: 0.503,
    },
    Orbit {
        name: "Saturn",
        semi_major_au: 9.537,
        eccentricity: 0.054,
        period_days: 10747.0,
        albedo: 0.342,
    },
    Orbit {
        name: "Uranus",
        semi_major_au: 19.19,
        eccentricity: 0.047,
        period_days: 30589.0,
        albedo: 0.3,
    },
    Orbit {
        name: "Neptune",
        semi_major_au: 30.07,
        eccentricity: 0.009,
        period_days: 59800.0,
        albedo: 0.29,
    },
    Orbit {
        name: "Pluto",
        semi_major_au: 39.48,
        eccentricity: 0.249,
        period_days: 90560.0,
        albedo: 0.72,
    },
];

impl Orbit {
    /// Sun distance in AU after `day` days, from the conic equation with a
    /// uniformly advancing angle.
    fn distance_au(&self, day: f64) -> f64 {
        let theta = 2.0 * PI * day / self.period_days;
        let e = self.eccentricity;
        self.semi_major_au * (1.0 - e * e) / (1.0 + e * theta.cos())
    }

    /// Radiative equilibrium temperature in °F, as the simulation displays it.
    fn temperature_f(&self, distance_au: f64) -> f64 {
        let d = distance_au * AU_METRES;
        let kelvin = (SUN_LUMINOSITY * (1.0 - self.albedo)
            / (16.0 * PI * STEFAN_BOLTZMANN * d * d))
            .powf(0.25);
        (kelvin - 273.15) * 9.0 / 5.0 + 32.0
    }
}

/// The brown dwarf passes the Sun on a straight line; closest at mid-run.
fn brown_dwarf_distance_au(step: usize, steps: usize) -> f64 {
    let closest = 60.0;
    let offset = (step as f64 - steps as f64 / 2.0) * 0.5;
    (closest * closest + offset * offset).sqrt()
}

fn writer_for(path: &Path) -> Result<csv::Writer<fs::File>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["name", " temp", " time", " distance"])?;
    Ok(writer)
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for orbit in &PLANETS {
        let path = args.out_dir.join(format!("{}.txt", orbit.name));
        let mut writer = writer_for(&path)?;
        for step in 0..args.steps {
            let distance = orbit.distance_au(step as f64 * TIME_STEP);
            writer.write_record([
                orbit.name.to_string(),
                format!("{:.2}", orbit.temperature_f(distance)),
                TIME_STEP.to_string(),
                distance.to_string(),
            ])?;
        }
        writer.flush()?;
    }

    // Stars export no temperature, only the literal placeholder.
    let path = args.out_dir.join("Brown Dwarf.txt");
    let mut writer = writer_for(&path)?;
    for step in 0..args.steps {
        writer.write_record([
            "Brown Dwarf".to_string(),
            "staticTemp".to_string(),
            TIME_STEP.to_string(),
            brown_dwarf_distance_au(step, args.steps).to_string(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Wrote {} body files ({} steps each) to {}",
        PLANETS.len() + 1,
        args.steps,
        args.out_dir.display()
    );
    Ok(())
}
