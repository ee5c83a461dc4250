//! Heuristics derived from an estimate
//!
//! Risk scoring, advice and the suggested configuration each encode their
//! own thresholds. They overlap but are tuned independently and are kept as
//! separate functions so one can change without silently moving the others.

mod advice;
mod risk;
mod suggest;

pub use advice::{advise, HEALTHY_ADVICE};
pub use risk::{risk_penalties, risk_score, RiskPenalty, MAX_RISK_SCORE};
pub use suggest::{SuggestedConfig, LOW_CARBON_REGIONS, TARGET_CONCURRENCY};

/// Requests per minute below which warm instances count as waste
pub const LOW_TRAFFIC_REQUESTS_PER_MIN: i64 = 60;

/// Utilization below which memory is considered over-provisioned
pub const LOW_UTILIZATION: f64 = 0.35;

pub(crate) fn low_traffic_with_warm_instances(min_instances: i64, requests_per_min: i64) -> bool {
    min_instances >= 1 && requests_per_min < LOW_TRAFFIC_REQUESTS_PER_MIN
}
