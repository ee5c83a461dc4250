//! Instance sizing and utilization
//!
//! Models request-driven autoscaling: the fleet grows to hold the
//! in-flight request load (Little's law) within the configured instance
//! bounds, and utilization is how full the concurrency slots are.

use crate::models::NormalizedInput;

/// Fleet shape derived from traffic and concurrency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    pub requests_per_second: f64,
    /// Average number of requests in flight at once
    pub concurrent_load: f64,
    pub active_instances: i64,
    /// Fraction of concurrency slots in use, always within [0, 1]
    pub utilization: f64,
}

impl Sizing {
    /// Size the fleet for a normalized input
    pub fn estimate(input: &NormalizedInput) -> Self {
        let requests_per_second = input.requests_per_min as f64 / 60.0;
        let concurrent_load = requests_per_second * (input.avg_duration_ms as f64 / 1000.0);
        let concurrency = input.concurrency as f64;

        // Raise to the floor first, then cap; with min > max the cap wins.
        let active = (concurrent_load / concurrency)
            .ceil()
            .max(input.min_instances as f64)
            .min(input.max_instances as f64);

        let utilization = if active > 0.0 {
            (concurrent_load / (active * concurrency)).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            requests_per_second,
            concurrent_load,
            active_instances: active as i64,
            utilization,
        }
    }

    /// Provisioned instances beyond the active fleet, kept warm by `min_instances`
    pub fn idle_instances(&self, input: &NormalizedInput) -> i64 {
        (input.min_instances - self.active_instances).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EstimateInput;

    fn input(requests_per_min: i64, concurrency: i64, min: i64, max: i64) -> NormalizedInput {
        EstimateInput {
            vcpu: 1.0,
            memory_gb: 1.0,
            concurrency,
            avg_duration_ms: 200,
            requests_per_min,
            region: "europe-west4".to_string(),
            min_instances: min,
            max_instances: max,
            idle_utilization_pc: 10.0,
        }
        .normalize()
    }

    #[test]
    fn test_light_traffic_single_instance() {
        let sizing = Sizing::estimate(&input(100, 80, 0, 10));

        assert!((sizing.requests_per_second - 1.6667).abs() < 1e-3);
        assert!((sizing.concurrent_load - 0.3333).abs() < 1e-3);
        assert_eq!(sizing.active_instances, 1);
        assert!((sizing.utilization - 0.3333 / 80.0).abs() < 1e-5);
        assert!(sizing.utilization > 0.0);
    }

    #[test]
    fn test_zero_traffic_guards_division() {
        let sizing = Sizing::estimate(&input(0, 80, 0, 10));

        assert_eq!(sizing.requests_per_second, 0.0);
        assert_eq!(sizing.concurrent_load, 0.0);
        assert_eq!(sizing.active_instances, 0);
        assert_eq!(sizing.utilization, 0.0);
    }

    #[test]
    fn test_zero_traffic_keeps_min_instances() {
        let normalized = input(0, 80, 3, 10);
        let sizing = Sizing::estimate(&normalized);

        assert_eq!(sizing.active_instances, 3);
        assert_eq!(sizing.utilization, 0.0);
        assert_eq!(sizing.idle_instances(&normalized), 0);
    }

    #[test]
    fn test_scales_out_with_load() {
        // 60_000 req/min * 0.2s = 200 in flight, / 20 per instance = 10
        let sizing = Sizing::estimate(&input(60_000, 20, 0, 100));

        assert_eq!(sizing.active_instances, 10);
        assert!((sizing.utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_capped_by_max_instances() {
        let sizing = Sizing::estimate(&input(60_000, 20, 0, 4));

        assert_eq!(sizing.active_instances, 4);
        assert_eq!(sizing.utilization, 1.0);
    }

    #[test]
    fn test_max_wins_when_bounds_inverted() {
        let sizing = Sizing::estimate(&input(100, 80, 5, 2));

        assert_eq!(sizing.active_instances, 2);
    }

    #[test]
    fn test_min_instances_absorbed_by_active_fleet() {
        let normalized = input(100, 80, 4, 10);
        let sizing = Sizing::estimate(&normalized);

        assert_eq!(sizing.active_instances, 4);
        assert_eq!(sizing.idle_instances(&normalized), 0);
    }

    #[test]
    fn test_idle_instances_when_capped_below_min() {
        let normalized = input(100, 80, 5, 2);
        let sizing = Sizing::estimate(&normalized);

        assert_eq!(sizing.idle_instances(&normalized), 3);
    }

    #[test]
    fn test_bounds_hold_across_inputs() {
        for &rpm in &[-600, 0, 1, 59, 600, 6_000, 600_000] {
            for &(min, max) in &[(0, 1), (0, 10), (2, 3), (5, 50)] {
                for &concurrency in &[1, 20, 80, 250] {
                    let sizing = Sizing::estimate(&input(rpm, concurrency, min, max));

                    assert!(sizing.active_instances >= min);
                    assert!(sizing.active_instances <= max);
                    assert!((0.0..=1.0).contains(&sizing.utilization));
                }
            }
        }
    }
}
