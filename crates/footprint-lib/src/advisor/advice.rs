//! Human-readable optimization advice

use super::{low_traffic_with_warm_instances, LOW_UTILIZATION};
use crate::models::NormalizedInput;

/// Emitted when no check fires
pub const HEALTHY_ADVICE: &str = "Configuration looks healthy. Keep automated checks per deploy.";

/// Ordered recommendations for a configuration.
///
/// `reported_cost_per_1k` is the per-1k cost as it appears in the result
/// (rounded to four decimals), so the message never disagrees with it.
pub fn advise(
    input: &NormalizedInput,
    utilization: f64,
    intensity: f64,
    reported_cost_per_1k: f64,
) -> Vec<String> {
    let mut advice = Vec::new();

    if input.concurrency < 40 {
        advice.push(format!(
            "Increase concurrency to ~80 (current {}) to reduce instance count/idle overhead.",
            input.concurrency
        ));
    }

    if input.memory_gb > 1.0 && utilization < LOW_UTILIZATION {
        advice.push(format!(
            "Right-size memory: {:.1}Gi with ~{:.0}% CPU util → try 1–1.5Gi.",
            input.memory_gb,
            utilization * 100.0
        ));
    }

    if low_traffic_with_warm_instances(input.min_instances, input.requests_per_min) {
        advice.push(
            "Traffic is low but min_instances>=1; use min_instances=0 with startup probe.".to_string(),
        );
    }

    if intensity > 400.0 {
        advice.push(
            "High CO₂ grid region; prefer europe-west4 or us-west1 for lower emissions.".to_string(),
        );
    }

    if input.avg_duration_ms > 300 {
        advice.push("High latency; cache hot data, reuse connections, reduce cold I/O.".to_string());
    }

    if reported_cost_per_1k > 0.01 {
        advice.push(format!(
            "Cost/1k ${:.4}; baseline CPU=1, MEM=1Gi, concurrency=80, then re-measure.",
            reported_cost_per_1k
        ));
    }

    if advice.is_empty() {
        advice.push(HEALTHY_ADVICE.to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EstimateInput;

    fn healthy() -> EstimateInput {
        EstimateInput {
            vcpu: 1.0,
            memory_gb: 1.0,
            concurrency: 80,
            avg_duration_ms: 200,
            requests_per_min: 600,
            region: "europe-west4".to_string(),
            min_instances: 0,
            max_instances: 5,
            idle_utilization_pc: 10.0,
        }
    }

    #[test]
    fn test_healthy_configuration() {
        let advice = advise(&healthy().normalize(), 0.5, 180.0, 0.0053);
        assert_eq!(advice, vec![HEALTHY_ADVICE.to_string()]);
    }

    #[test]
    fn test_low_concurrency_advice() {
        let mut input = healthy();
        input.concurrency = 20;
        let advice = advise(&input.normalize(), 0.5, 180.0, 0.0053);

        assert_eq!(
            advice,
            vec![
                "Increase concurrency to ~80 (current 20) to reduce instance count/idle overhead."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_memory_threshold_lower_than_risk_scorer() {
        let mut input = healthy();
        input.memory_gb = 1.2;
        let advice = advise(&input.normalize(), 0.1, 180.0, 0.0053);

        assert_eq!(
            advice,
            vec!["Right-size memory: 1.2Gi with ~10% CPU util → try 1–1.5Gi.".to_string()]
        );
    }

    #[test]
    fn test_checks_emitted_in_fixed_order() {
        let input = EstimateInput {
            vcpu: 2.0,
            memory_gb: 4.0,
            concurrency: 10,
            avg_duration_ms: 900,
            requests_per_min: 5,
            region: "asia-south1".to_string(),
            min_instances: 1,
            max_instances: 5,
            idle_utilization_pc: 10.0,
        };
        let advice = advise(&input.normalize(), 0.0, 700.0, 0.0486);

        assert_eq!(advice.len(), 6);
        assert!(advice[0].starts_with("Increase concurrency"));
        assert!(advice[1].starts_with("Right-size memory: 4.0Gi with ~0%"));
        assert!(advice[2].starts_with("Traffic is low"));
        assert!(advice[3].starts_with("High CO₂ grid region"));
        assert!(advice[4].starts_with("High latency"));
        assert_eq!(
            advice[5],
            "Cost/1k $0.0486; baseline CPU=1, MEM=1Gi, concurrency=80, then re-measure."
        );
    }

    #[test]
    fn test_unknown_region_triggers_carbon_advice() {
        let mut input = healthy();
        input.region = "mars-west1".to_string();
        let advice = advise(&input.normalize(), 0.5, 450.0, 0.0053);

        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("prefer europe-west4 or us-west1"));
    }

    #[test]
    fn test_cost_at_threshold_not_flagged() {
        let advice = advise(&healthy().normalize(), 0.5, 180.0, 0.01);
        assert_eq!(advice, vec![HEALTHY_ADVICE.to_string()]);
    }
}
