//! Input normalization
//!
//! Replaces missing or non-positive sizing fields with defaults so the rest
//! of the pipeline never sees a zero divisor. Normalization is total: it
//! never rejects input.

use crate::models::{EstimateInput, NormalizedInput};

/// Idle CPU utilization assumed for provisioned-but-idle instances (percent)
pub const DEFAULT_IDLE_UTILIZATION_PC: f64 = 10.0;

/// Requests one instance serves simultaneously when unspecified
pub const DEFAULT_CONCURRENCY: i64 = 80;

pub const DEFAULT_VCPU: f64 = 1.0;

pub const DEFAULT_MEMORY_GB: f64 = 1.0;

pub const DEFAULT_AVG_DURATION_MS: i64 = 200;

pub const DEFAULT_MIN_INSTANCES: i64 = 0;

pub const DEFAULT_MAX_INSTANCES: i64 = 1;

impl EstimateInput {
    /// Default every invalid field. Region and requests per minute pass
    /// through untouched; zero traffic is a legitimate input.
    pub fn normalize(mut self) -> NormalizedInput {
        if self.idle_utilization_pc <= 0.0 || self.idle_utilization_pc.is_nan() {
            self.idle_utilization_pc = DEFAULT_IDLE_UTILIZATION_PC;
        }
        if self.concurrency <= 0 {
            self.concurrency = DEFAULT_CONCURRENCY;
        }
        if self.vcpu <= 0.0 || self.vcpu.is_nan() {
            self.vcpu = DEFAULT_VCPU;
        }
        if self.memory_gb <= 0.0 || self.memory_gb.is_nan() {
            self.memory_gb = DEFAULT_MEMORY_GB;
        }
        if self.avg_duration_ms <= 0 {
            self.avg_duration_ms = DEFAULT_AVG_DURATION_MS;
        }
        if self.min_instances < 0 {
            self.min_instances = DEFAULT_MIN_INSTANCES;
        }
        if self.max_instances <= 0 {
            self.max_instances = DEFAULT_MAX_INSTANCES;
        }

        NormalizedInput::new(self)
    }
}
