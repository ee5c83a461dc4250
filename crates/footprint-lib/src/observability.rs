//! Observability infrastructure for the estimator service
//!
//! Provides:
//! - Prometheus metrics (estimate latency, request counts, risk and CO2 distributions)
//! - Structured JSON logging with tracing

use crate::estimator::Evaluation;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Histogram buckets for estimate latency (in seconds); the pipeline is pure arithmetic
const LATENCY_BUCKETS: &[f64] = &[
    0.000_001, 0.000_005, 0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01,
];

const RISK_SCORE_BUCKETS: &[f64] = &[10.0, 25.0, 40.0, 55.0, 70.0, 80.0, 90.0, 100.0];

/// Per-1k CO2 buckets in grams
const CO2_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 50.0, 100.0];

static GLOBAL_METRICS: OnceLock<EstimatorMetricsInner> = OnceLock::new();

struct EstimatorMetricsInner {
    estimates_total: IntCounterVec,
    estimate_latency_seconds: Histogram,
    rejected_requests_total: IntCounter,
    unknown_region_total: IntCounter,
    risk_score: Histogram,
    estimated_co2_grams: Histogram,
}

impl EstimatorMetricsInner {
    fn new() -> Self {
        Self {
            estimates_total: register_int_counter_vec!(
                "footprint_estimates_total",
                "Total number of estimates computed, by region",
                &["region"]
            )
            .expect("Failed to register estimates_total"),

            estimate_latency_seconds: register_histogram!(
                "footprint_estimate_latency_seconds",
                "Time spent running the estimation pipeline",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register estimate_latency_seconds"),

            rejected_requests_total: register_int_counter!(
                "footprint_rejected_requests_total",
                "Total number of estimate requests rejected before estimation"
            )
            .expect("Failed to register rejected_requests_total"),

            unknown_region_total: register_int_counter!(
                "footprint_unknown_region_total",
                "Estimates that fell back to the default grid intensity"
            )
            .expect("Failed to register unknown_region_total"),

            risk_score: register_histogram!(
                "footprint_risk_score",
                "Distribution of computed risk scores",
                RISK_SCORE_BUCKETS.to_vec()
            )
            .expect("Failed to register risk_score"),

            estimated_co2_grams: register_histogram!(
                "footprint_estimated_co2_grams",
                "Estimated CO2 grams per 1000 requests",
                CO2_BUCKETS.to_vec()
            )
            .expect("Failed to register estimated_co2_grams"),
        }
    }
}

/// Estimator metrics for Prometheus exposition
///
/// A lightweight handle to the global metrics instance; clones share the
/// same underlying metrics.
#[derive(Clone)]
pub struct EstimatorMetrics {
    _private: (),
}

impl Default for EstimatorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(EstimatorMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &EstimatorMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a completed estimate and how long it took
    pub fn observe_estimate(&self, evaluation: &Evaluation, duration_secs: f64) {
        let inner = self.inner();
        // Free-form regions would blow up label cardinality
        let region_label = if evaluation.known_region {
            evaluation.input.region.as_str()
        } else {
            "unknown"
        };

        inner.estimates_total.with_label_values(&[region_label]).inc();
        inner.estimate_latency_seconds.observe(duration_secs);
        inner.risk_score.observe(f64::from(evaluation.result.risk_score));
        inner
            .estimated_co2_grams
            .observe(evaluation.result.per_1k_requests.co2_g);
        if !evaluation.known_region {
            inner.unknown_region_total.inc();
        }
    }

    pub fn inc_rejected_requests(&self) {
        self.inner().rejected_requests_total.inc();
    }
}

/// Structured logger for estimator events
#[derive(Clone)]
pub struct StructuredLogger {
    service: String,
}

impl StructuredLogger {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Log a computed estimate
    pub fn log_estimate(&self, evaluation: &Evaluation) {
        let result = &evaluation.result;
        let penalties: Vec<&str> = evaluation.penalties.iter().map(|p| p.as_str()).collect();

        info!(
            event = "estimate_computed",
            service = %self.service,
            region = %evaluation.input.region,
            known_region = evaluation.known_region,
            grid_intensity = evaluation.grid_intensity,
            active_instances = evaluation.sizing.active_instances,
            idle_instances = result.assumptions.idle_instances,
            utilization = evaluation.sizing.utilization,
            cost_per_1k_usd = result.per_1k_requests.cost_usd,
            co2_per_1k_g = result.per_1k_requests.co2_g,
            risk_score = result.risk_score,
            penalties = ?penalties,
            advice_count = result.advice.len(),
            "Estimate computed"
        );

        if !evaluation.known_region {
            warn!(
                event = "unknown_region",
                service = %self.service,
                region = %evaluation.input.region,
                grid_intensity = evaluation.grid_intensity,
                "Region not in grid intensity table, using default"
            );
        }
    }

    /// Log a request rejected before estimation
    pub fn log_rejected(&self, reason: &str) {
        warn!(
            event = "estimate_rejected",
            service = %self.service,
            reason = %reason,
            "Estimate request rejected"
        );
    }

    pub fn log_startup(&self, version: &str, addr: &str) {
        info!(
            event = "service_started",
            service = %self.service,
            version = %version,
            addr = %addr,
            "Footprint estimator started"
        );
    }

    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            service = %self.service,
            reason = %reason,
            "Footprint estimator shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Estimator;
    use crate::models::EstimateInput;

    #[test]
    fn test_estimator_metrics_observe() {
        // Registration is global; repeated handles reuse it
        let metrics = EstimatorMetrics::new();
        let _second = EstimatorMetrics::new();

        let evaluation = Estimator::new().evaluate(EstimateInput {
            region: "mars-west1".to_string(),
            requests_per_min: 600,
            ..Default::default()
        });
        metrics.observe_estimate(&evaluation, 0.00002);
        metrics.inc_rejected_requests();

        let families = prometheus::gather();
        assert!(families
            .iter()
            .any(|f| f.get_name() == "footprint_unknown_region_total"));
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("footprint-api");
        assert_eq!(logger.service, "footprint-api");

        let evaluation = Estimator::new().evaluate(EstimateInput::default());
        logger.log_estimate(&evaluation);
    }
}
