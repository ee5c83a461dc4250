//! Core data models for the footprint estimator

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

/// Declared workload sizing and traffic shape, as received from a caller.
///
/// Every field is optional on the wire; absent or `null` fields take their
/// zero value and are replaced with defaults by [`EstimateInput::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateInput {
    #[serde(deserialize_with = "null_as_default")]
    pub vcpu: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_gb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub concurrency: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_duration_ms: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub requests_per_min: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub min_instances: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_instances: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub idle_utilization_pc: f64,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An [`EstimateInput`] whose sizing fields have been checked and defaulted.
///
/// Only [`EstimateInput::normalize`] builds one, so every stage downstream of
/// the normalizer can rely on positive sizing values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput(EstimateInput);

impl NormalizedInput {
    pub(crate) fn new(input: EstimateInput) -> Self {
        Self(input)
    }

    pub fn into_inner(self) -> EstimateInput {
        self.0
    }
}

impl Deref for NormalizedInput {
    type Target = EstimateInput;

    fn deref(&self) -> &EstimateInput {
        &self.0
    }
}

/// Energy, emissions and cost over one accounting basis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub energy_kwh: f64,
    pub co2_g: f64,
    pub cost_usd: f64,
}

/// 30-day extrapolation of the per-1k figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    pub requests: i64,
    pub cost_usd: f64,
    pub co2_kg: f64,
    pub energy_kwh: f64,
    pub assumption: String,
}

/// Intermediate values reported back for transparency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub region: String,
    pub grid_intensity_g_per_kwh: f64,
    pub active_instances: i64,
    pub idle_instances: i64,
    /// CPU utilization in percent, rounded to one decimal
    pub cpu_utilization_est: f64,
    pub seconds_per_request: f64,
}

/// Full estimation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub per_1k_requests: Footprint,
    pub per_hour: Footprint,
    /// 0..100, where 100 means no flagged issues
    pub risk_score: u8,
    pub suggested_yaml: String,
    pub monthly_forecast: MonthlyForecast,
    pub assumptions: Assumptions,
    pub advice: Vec<String>,
}

/// Round `value` to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
