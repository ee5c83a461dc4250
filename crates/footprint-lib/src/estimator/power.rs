//! Power, energy and cost model
//!
//! CPU power scales linearly with utilization on top of a flat memory draw.
//! Billing is pay-per-use: vCPU-seconds and GB-seconds at fixed unit prices.

use super::sizing::Sizing;
use crate::models::NormalizedInput;

/// Power draw of one vCPU at 100% utilization (watts)
pub const WATTS_PER_VCPU_AT_FULL: f64 = 12.0;

/// Power draw per GB of provisioned memory (watts)
pub const WATTS_PER_GB_MEMORY: f64 = 0.35;

pub const COST_PER_VCPU_SECOND: f64 = 0.000024;

pub const COST_PER_GB_SECOND: f64 = 0.0000025;

/// Requests per accounting chunk for the per-1k basis
pub const REQUESTS_PER_CHUNK: f64 = 1000.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Instantaneous draw of one instance
pub fn power_watts(vcpu: f64, memory_gb: f64, cpu_utilization: f64) -> f64 {
    WATTS_PER_VCPU_AT_FULL * vcpu * cpu_utilization.clamp(0.0, 1.0) + WATTS_PER_GB_MEMORY * memory_gb
}

pub fn kwh_from_watts(watts: f64, seconds: f64) -> f64 {
    watts * seconds / 1000.0 / SECONDS_PER_HOUR
}

pub fn runtime_cost_usd(vcpu: f64, memory_gb: f64, seconds: f64) -> f64 {
    vcpu * seconds * COST_PER_VCPU_SECOND + memory_gb * seconds * COST_PER_GB_SECOND
}

/// Energy and cost before carbon weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCost {
    pub energy_kwh: f64,
    pub cost_usd: f64,
}

/// Energy and cost on both accounting bases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerBreakdown {
    pub seconds_per_request: f64,
    pub active_watts: f64,
    pub idle_watts: f64,
    pub fleet_watts: f64,
    pub per_1k: EnergyCost,
    pub per_hour: EnergyCost,
}

impl PowerBreakdown {
    pub fn compute(input: &NormalizedInput, sizing: &Sizing) -> Self {
        let seconds_per_request = input.avg_duration_ms as f64 / 1000.0;
        let seconds_per_1k = seconds_per_request * REQUESTS_PER_CHUNK;

        let active_watts = power_watts(input.vcpu, input.memory_gb, sizing.utilization);
        let per_1k = EnergyCost {
            energy_kwh: kwh_from_watts(active_watts, seconds_per_1k),
            cost_usd: runtime_cost_usd(input.vcpu, input.memory_gb, seconds_per_1k),
        };

        // Warm instances above the active fleet draw idle power
        let idle_utilization = (input.idle_utilization_pc / 100.0).clamp(0.0, 1.0);
        let idle_watts = power_watts(input.vcpu, input.memory_gb, idle_utilization);
        let active = sizing.active_instances as f64;
        let idle = sizing.idle_instances(input) as f64;
        let fleet_watts = active_watts * active + idle_watts * idle;

        // Only busy time on the active fleet is billed
        let busy_seconds = SECONDS_PER_HOUR * sizing.utilization;
        let per_hour = EnergyCost {
            energy_kwh: kwh_from_watts(fleet_watts, SECONDS_PER_HOUR),
            cost_usd: runtime_cost_usd(input.vcpu * active, input.memory_gb * active, busy_seconds),
        };

        Self {
            seconds_per_request,
            active_watts,
            idle_watts,
            fleet_watts,
            per_1k,
            per_hour,
        }
    }
}
