//! Suggested deployment configuration
//!
//! Applies the advisor's fixes to a copy of the normalized input and
//! renders it as a Cloud Run style YAML snippet.

use super::{low_traffic_with_warm_instances, LOW_UTILIZATION};
use crate::models::NormalizedInput;
use std::fmt;

/// Minimum concurrency the suggestion raises to
pub const TARGET_CONCURRENCY: i64 = 80;

/// Memory ceiling applied to over-provisioned, under-used services (GB)
pub const SUGGESTED_MEMORY_CAP_GB: f64 = 1.5;

/// Regions left alone by the carbon rewrite; the first one is the target
pub const LOW_CARBON_REGIONS: [&str; 2] = ["europe-west4", "us-west1"];

/// Adjusted configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedConfig {
    pub region: String,
    pub vcpu: f64,
    pub memory_gb: f64,
    pub min_instances: i64,
    pub max_instances: i64,
    pub concurrency: i64,
}

impl SuggestedConfig {
    pub fn suggest(input: &NormalizedInput, utilization: f64, intensity: f64) -> Self {
        let mut config = Self {
            region: input.region.clone(),
            vcpu: input.vcpu,
            memory_gb: input.memory_gb,
            min_instances: input.min_instances,
            max_instances: input.max_instances,
            concurrency: input.concurrency.max(TARGET_CONCURRENCY),
        };

        if config.memory_gb > SUGGESTED_MEMORY_CAP_GB && utilization < LOW_UTILIZATION {
            config.memory_gb = SUGGESTED_MEMORY_CAP_GB;
        }

        if intensity > 400.0 && !LOW_CARBON_REGIONS.contains(&config.region.as_str()) {
            config.region = LOW_CARBON_REGIONS[0].to_string();
        }

        if low_traffic_with_warm_instances(config.min_instances, input.requests_per_min) {
            config.min_instances = 0;
        }

        config
    }
}

impl fmt::Display for SuggestedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Suggested Cloud Run config (opt.)")?;
        writeln!(f, "region: {}", self.region)?;
        writeln!(f, "cpu: {:.0}", self.vcpu)?;
        writeln!(f, "memory: {:.1}Gi", self.memory_gb)?;
        writeln!(f, "minInstances: {}", self.min_instances)?;
        writeln!(f, "maxInstances: {}", self.max_instances)?;
        writeln!(f, "concurrency: {}", self.concurrency)?;
        writeln!(f, "ingress: all")
    }
}
