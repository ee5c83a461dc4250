//! Region listing command

use anyhow::Result;
use colored::Colorize;
use footprint_lib::estimator::{known_regions, DEFAULT_GRID_INTENSITY};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{color_intensity, OutputFormat};

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Grid Intensity")]
    intensity: String,
}

#[derive(Serialize)]
struct RegionEntry {
    region: &'static str,
    grid_intensity_g_per_kwh: f64,
}

#[derive(Serialize)]
struct RegionList {
    regions: Vec<RegionEntry>,
    default_grid_intensity_g_per_kwh: f64,
}

/// List known regions, lowest carbon first
pub fn list_regions(format: OutputFormat) -> Result<()> {
    let regions = known_regions();

    match format {
        OutputFormat::Json => {
            let list = RegionList {
                regions: regions
                    .iter()
                    .map(|&(region, intensity)| RegionEntry {
                        region,
                        grid_intensity_g_per_kwh: intensity,
                    })
                    .collect(),
                default_grid_intensity_g_per_kwh: DEFAULT_GRID_INTENSITY,
            };
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Table => {
            let rows: Vec<RegionRow> = regions
                .iter()
                .map(|&(region, intensity)| RegionRow {
                    region: region.to_string(),
                    intensity: color_intensity(intensity),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!(
                "{}",
                format!(
                    "Unlisted regions use {:.0} g/kWh",
                    DEFAULT_GRID_INTENSITY
                )
                .dimmed()
            );
        }
    }

    Ok(())
}
