//! Penalty-based risk score
//!
//! Starts from a perfect score and deducts a fixed number of points per red
//! flag. Deductions from unrelated categories stack.

use super::{low_traffic_with_warm_instances, LOW_UTILIZATION};
use crate::models::NormalizedInput;
use serde::Serialize;

pub const MAX_RISK_SCORE: u8 = 100;

/// A single red flag and its deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPenalty {
    /// Grid intensity above 500 g/kWh
    HighCarbonGrid,
    /// Grid intensity above 350 g/kWh
    ElevatedCarbonGrid,
    LowConcurrency,
    /// More than 1.5 GB of memory at low utilization
    OverProvisionedMemory,
    /// Warm instances billed while traffic is low
    IdleMinInstances,
    /// Per-1k cost above $0.015
    HighCost,
    /// Per-1k cost above $0.01
    ElevatedCost,
}

impl RiskPenalty {
    pub fn points(&self) -> u8 {
        match self {
            RiskPenalty::HighCarbonGrid => 20,
            RiskPenalty::ElevatedCarbonGrid => 10,
            RiskPenalty::LowConcurrency => 15,
            RiskPenalty::OverProvisionedMemory => 15,
            RiskPenalty::IdleMinInstances => 10,
            RiskPenalty::HighCost => 15,
            RiskPenalty::ElevatedCost => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskPenalty::HighCarbonGrid => "high_carbon_grid",
            RiskPenalty::ElevatedCarbonGrid => "elevated_carbon_grid",
            RiskPenalty::LowConcurrency => "low_concurrency",
            RiskPenalty::OverProvisionedMemory => "over_provisioned_memory",
            RiskPenalty::IdleMinInstances => "idle_min_instances",
            RiskPenalty::HighCost => "high_cost",
            RiskPenalty::ElevatedCost => "elevated_cost",
        }
    }
}

/// Red flags raised by a configuration, in check order
pub fn risk_penalties(
    input: &NormalizedInput,
    utilization: f64,
    intensity: f64,
    cost_per_1k: f64,
) -> Vec<RiskPenalty> {
    let mut penalties = Vec::new();

    if intensity > 500.0 {
        penalties.push(RiskPenalty::HighCarbonGrid);
    } else if intensity > 350.0 {
        penalties.push(RiskPenalty::ElevatedCarbonGrid);
    }

    if input.concurrency < 40 {
        penalties.push(RiskPenalty::LowConcurrency);
    }

    if input.memory_gb > 1.5 && utilization < LOW_UTILIZATION {
        penalties.push(RiskPenalty::OverProvisionedMemory);
    }

    if low_traffic_with_warm_instances(input.min_instances, input.requests_per_min) {
        penalties.push(RiskPenalty::IdleMinInstances);
    }

    if cost_per_1k > 0.015 {
        penalties.push(RiskPenalty::HighCost);
    } else if cost_per_1k > 0.01 {
        penalties.push(RiskPenalty::ElevatedCost);
    }

    penalties
}

/// Score in [0, 100]; 100 means nothing was flagged
pub fn risk_score(penalties: &[RiskPenalty]) -> u8 {
    let deducted: u32 = penalties.iter().map(|p| u32::from(p.points())).sum();
    u32::from(MAX_RISK_SCORE).saturating_sub(deducted) as u8
}
