//! Grid carbon intensity lookup and emissions

use std::collections::HashMap;
use std::sync::OnceLock;

/// Fallback intensity for regions missing from the table (g CO2/kWh)
pub const DEFAULT_GRID_INTENSITY: f64 = 450.0;

/// Static grid intensities (g CO2/kWh) for known regions
const GRID_INTENSITY_TABLE: &[(&str, f64)] = &[
    ("us-central1", 400.0),
    ("us-east1", 420.0),
    ("us-west1", 300.0),
    ("europe-west1", 230.0),
    ("europe-west4", 180.0),
    ("asia-south1", 700.0),
    ("asia-southeast1", 500.0),
];

static GRID_INTENSITY: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, f64> {
    GRID_INTENSITY.get_or_init(|| GRID_INTENSITY_TABLE.iter().copied().collect())
}

/// Intensity for a known region, `None` when the region is not in the table
pub fn lookup(region: &str) -> Option<f64> {
    table().get(region).copied()
}

/// Intensity for any region, falling back to [`DEFAULT_GRID_INTENSITY`]
pub fn grid_intensity(region: &str) -> f64 {
    lookup(region).unwrap_or(DEFAULT_GRID_INTENSITY)
}

/// Known regions and their intensities, lowest carbon first
pub fn known_regions() -> Vec<(&'static str, f64)> {
    let mut regions = GRID_INTENSITY_TABLE.to_vec();
    regions.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    regions
}

pub fn co2_grams(energy_kwh: f64, intensity_g_per_kwh: f64) -> f64 {
    energy_kwh * intensity_g_per_kwh
}
