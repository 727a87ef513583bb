use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Sample dataset generator
// ---------------------------------------------------------------------------
//
// Writes one conforming CSV per dashboard module into `sample_data/`, so
// every view can be exercised without hunting for real sector data. The
// trends are deterministic: a growth curve plus a mild seasonal wiggle.

const YEARS: std::ops::RangeInclusive<i64> = 2004..=2023;

#[derive(Serialize)]
struct GenerationRow {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Total Generation")]
    total_generation: f64,
}

#[derive(Serialize)]
struct SupplyDemandRow {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Total_Generation")]
    total_generation: f64,
    #[serde(rename = "Total_Demand")]
    total_demand: f64,
}

#[derive(Serialize)]
struct ConsumptionRow {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Residential Consumption")]
    residential: f64,
    #[serde(rename = "Industrial Consumption")]
    industrial: f64,
    #[serde(rename = "Agricultural Consumption")]
    agricultural: f64,
}

#[derive(Serialize)]
struct EnergyMixRow {
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Hydel")]
    hydel: f64,
    #[serde(rename = "Thermal")]
    thermal: f64,
    #[serde(rename = "Nuclear")]
    nuclear: f64,
    #[serde(rename = "Solar")]
    solar: f64,
    #[serde(rename = "Wind")]
    wind: f64,
}

/// Smooth pseudo-noise so the sample charts do not look like ruler lines.
fn wiggle(year: i64, phase: f64, amplitude: f64) -> f64 {
    ((year as f64) * 0.9 + phase).sin() * amplitude
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn write_csv<T: Serialize>(dir: &Path, name: &str, rows: Vec<T>) -> Result<()> {
    let path = dir.join(name);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    let n = rows.len();
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    println!("Wrote {n} rows to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new("sample_data");
    std::fs::create_dir_all(dir).context("creating sample_data directory")?;

    // Generation in TWh, roughly 4% yearly growth.
    let generation: Vec<GenerationRow> = YEARS
        .map(|year| {
            let t = (year - 2004) as f64;
            GenerationRow {
                year,
                total_generation: round1(85.0 * 1.04_f64.powf(t) + wiggle(year, 0.0, 3.0)),
            }
        })
        .collect();
    write_csv(dir, "generation.csv", generation)?;

    // Demand grows faster than supply, so the derived shortage widens.
    let supply_demand: Vec<SupplyDemandRow> = YEARS
        .map(|year| {
            let t = (year - 2004) as f64;
            SupplyDemandRow {
                year,
                total_generation: round1(85.0 * 1.04_f64.powf(t) + wiggle(year, 0.0, 3.0)),
                total_demand: round1(88.0 * 1.05_f64.powf(t) + wiggle(year, 1.3, 2.0)),
            }
        })
        .collect();
    write_csv(dir, "supply_demand.csv", supply_demand)?;

    let consumption: Vec<ConsumptionRow> = YEARS
        .map(|year| {
            let t = (year - 2004) as f64;
            ConsumptionRow {
                year,
                residential: round1(38.0 + 1.8 * t + wiggle(year, 0.4, 1.5)),
                industrial: round1(30.0 + 1.2 * t + wiggle(year, 2.1, 1.2)),
                agricultural: round1(11.0 + 0.3 * t + wiggle(year, 3.6, 0.6)),
            }
        })
        .collect();
    write_csv(dir, "consumption.csv", consumption)?;

    // Shares in TWh: thermal dominant, renewables appearing late.
    let energy_mix: Vec<EnergyMixRow> = YEARS
        .map(|year| {
            let t = (year - 2004) as f64;
            EnergyMixRow {
                year,
                hydel: round1(28.0 + 0.6 * t + wiggle(year, 0.8, 1.0)),
                thermal: round1(50.0 + 2.0 * t + wiggle(year, 1.9, 2.0)),
                nuclear: round1(4.0 + 0.5 * t),
                solar: round1((0.1 * t * t).min(9.0)),
                wind: round1((0.12 * t * t).min(11.0)),
            }
        })
        .collect();
    write_csv(dir, "energy_mix.csv", energy_mix)?;

    Ok(())
}
