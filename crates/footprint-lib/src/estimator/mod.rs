//! Estimation pipeline
//!
//! Normalizes the declared workload, sizes the fleet and derives energy,
//! cost, emissions and a monthly forecast. The downstream heuristics in
//! [`crate::advisor`] consume the same intermediate values.

mod carbon;
mod forecast;
mod normalize;
mod power;
mod sizing;

pub use carbon::{co2_grams, grid_intensity, known_regions, lookup, DEFAULT_GRID_INTENSITY};
pub use forecast::{forecast, monthly_requests, DAYS_PER_MONTH};
pub use normalize::{
    DEFAULT_AVG_DURATION_MS, DEFAULT_CONCURRENCY, DEFAULT_IDLE_UTILIZATION_PC,
    DEFAULT_MAX_INSTANCES, DEFAULT_MEMORY_GB, DEFAULT_MIN_INSTANCES, DEFAULT_VCPU,
};
pub use power::{
    kwh_from_watts, power_watts, runtime_cost_usd, EnergyCost, PowerBreakdown,
    COST_PER_GB_SECOND, COST_PER_VCPU_SECOND, REQUESTS_PER_CHUNK, WATTS_PER_GB_MEMORY,
    WATTS_PER_VCPU_AT_FULL,
};
pub use sizing::Sizing;

use crate::advisor::{advise, risk_penalties, risk_score, RiskPenalty, SuggestedConfig};
use crate::models::{round_to, Assumptions, EstimateInput, EstimateResult, Footprint, NormalizedInput};

/// Every intermediate value of one pipeline run, plus the final result
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub input: NormalizedInput,
    pub sizing: Sizing,
    pub power: PowerBreakdown,
    pub grid_intensity: f64,
    /// False when the region fell back to [`DEFAULT_GRID_INTENSITY`]
    pub known_region: bool,
    pub penalties: Vec<RiskPenalty>,
    pub result: EstimateResult,
}

/// Stateless estimator; every call recomputes from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator;

impl Estimator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline and keep the intermediates
    pub fn evaluate(&self, input: EstimateInput) -> Evaluation {
        let input = input.normalize();
        let sizing = Sizing::estimate(&input);
        let power = PowerBreakdown::compute(&input, &sizing);

        let region_intensity = lookup(&input.region);
        let intensity = region_intensity.unwrap_or(DEFAULT_GRID_INTENSITY);

        let per_1k_requests = Footprint {
            energy_kwh: round_to(power.per_1k.energy_kwh, 5),
            co2_g: round_to(co2_grams(power.per_1k.energy_kwh, intensity), 2),
            cost_usd: round_to(power.per_1k.cost_usd, 4),
        };
        let per_hour = Footprint {
            energy_kwh: round_to(power.per_hour.energy_kwh, 5),
            co2_g: round_to(co2_grams(power.per_hour.energy_kwh, intensity), 2),
            cost_usd: round_to(power.per_hour.cost_usd, 4),
        };

        let monthly_forecast = forecast(input.requests_per_min, &power.per_1k, intensity);

        // Scoring sees the exact cost, advice sees the reported one
        let penalties = risk_penalties(&input, sizing.utilization, intensity, power.per_1k.cost_usd);
        let risk_score = risk_score(&penalties);
        let suggested = SuggestedConfig::suggest(&input, sizing.utilization, intensity);
        let advice = advise(&input, sizing.utilization, intensity, per_1k_requests.cost_usd);

        let assumptions = Assumptions {
            region: input.region.clone(),
            grid_intensity_g_per_kwh: intensity,
            active_instances: sizing.active_instances,
            // Provisioned warm floor; the fleet-watts term uses Sizing::idle_instances
            idle_instances: input.min_instances.max(0),
            cpu_utilization_est: round_to(sizing.utilization * 100.0, 1),
            seconds_per_request: power.seconds_per_request,
        };

        let result = EstimateResult {
            per_1k_requests,
            per_hour,
            risk_score,
            suggested_yaml: suggested.to_string(),
            monthly_forecast,
            assumptions,
            advice,
        };

        Evaluation {
            input,
            sizing,
            power,
            grid_intensity: intensity,
            known_region: region_intensity.is_some(),
            penalties,
            result,
        }
    }

    pub fn estimate(&self, input: EstimateInput) -> EstimateResult {
        self.evaluate(input).result
    }
}

/// Run the pipeline once and return only the result
pub fn estimate(input: EstimateInput) -> EstimateResult {
    Estimator::new().estimate(input)
}
