//! Monthly forecast
//!
//! Linear 30-day extrapolation of the per-1k figures at constant traffic.
//! Diurnal patterns, bursts and weekday effects are not modelled; the
//! assumption string in the output says so.

use super::power::{EnergyCost, REQUESTS_PER_CHUNK};
use crate::models::{round_to, MonthlyForecast};

pub const DAYS_PER_MONTH: i64 = 30;

const MINUTES_PER_DAY: f64 = 60.0 * 24.0;

/// Requests served in a month of steady traffic, truncated to a whole count
pub fn monthly_requests(requests_per_min: i64) -> i64 {
    // Negative traffic is treated as none so forecasts stay non-negative
    let per_min = requests_per_min.max(0) as f64;
    (per_min * MINUTES_PER_DAY * DAYS_PER_MONTH as f64) as i64
}

pub fn forecast(requests_per_min: i64, per_1k: &EnergyCost, intensity: f64) -> MonthlyForecast {
    let requests = monthly_requests(requests_per_min);
    let chunks = requests as f64 / REQUESTS_PER_CHUNK;
    let cost_usd = chunks * per_1k.cost_usd;
    let energy_kwh = chunks * per_1k.energy_kwh;
    let co2_kg = energy_kwh * intensity / 1000.0;

    MonthlyForecast {
        requests,
        cost_usd: round_to(cost_usd, 2),
        co2_kg: round_to(co2_kg, 2),
        energy_kwh: round_to(energy_kwh, 2),
        assumption: format!("{} days @ {} req/min steady", DAYS_PER_MONTH, requests_per_min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_requests() {
        assert_eq!(monthly_requests(0), 0);
        assert_eq!(monthly_requests(1), 43_200);
        assert_eq!(monthly_requests(600), 25_920_000);
        assert_eq!(monthly_requests(-10), 0);
    }

    #[test]
    fn test_forecast_scales_per_1k_figures() {
        let per_1k = EnergyCost {
            energy_kwh: 0.001,
            cost_usd: 0.005,
        };
        let forecast = forecast(100, &per_1k, 400.0);

        // 4_320_000 requests -> 4_320 chunks
        assert_eq!(forecast.requests, 4_320_000);
        assert_eq!(forecast.cost_usd, 21.6);
        assert_eq!(forecast.energy_kwh, 4.32);
        assert_eq!(forecast.co2_kg, 1.73);
        assert_eq!(forecast.assumption, "30 days @ 100 req/min steady");
    }

    #[test]
    fn test_no_traffic_forecast() {
        let per_1k = EnergyCost {
            energy_kwh: 0.002,
            cost_usd: 0.01,
        };
        let forecast = forecast(0, &per_1k, 700.0);

        assert_eq!(forecast.requests, 0);
        assert_eq!(forecast.cost_usd, 0.0);
        assert_eq!(forecast.co2_kg, 0.0);
    }
}
