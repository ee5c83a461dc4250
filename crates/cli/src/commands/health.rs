//! Service health command

use anyhow::Result;
use colored::Colorize;
use footprint_lib::{HealthResponse, ReadinessResponse};
use serde::Serialize;

use crate::client::ApiClient;
use crate::output::{color_status, print_warning, OutputFormat};

#[derive(Serialize)]
struct ServiceStatus {
    health: HealthResponse,
    readiness: ReadinessResponse,
}

/// Query liveness and readiness of the estimator service
pub async fn show_health(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let health: HealthResponse = client.get("healthz").await?;
    let (_, readiness): (_, ReadinessResponse) = client.get_with_status("readyz").await?;

    match format {
        OutputFormat::Json => {
            let status = ServiceStatus { health, readiness };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Table => {
            let status = serde_json::to_value(health.status)?;
            let status = status.as_str().unwrap_or("unknown");

            println!("{}", "Estimator Service".bold());
            println!("{}", "=".repeat(50));
            println!("Status:                 {}", color_status(status));
            println!(
                "Ready:                  {}",
                color_status(if readiness.ready { "ready" } else { "not ready" })
            );
            println!("Version:                {}", health.version);
            println!("Started:                {}", format_timestamp(health.started_at));
            println!("Uptime:                 {}s", health.uptime_secs);
            println!("Known regions:          {}", health.known_regions);

            if let Some(reason) = readiness.reason {
                print_warning(&reason);
            }
        }
    }

    Ok(())
}

/// Format a unix timestamp for display
fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
