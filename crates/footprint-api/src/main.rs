//! Footprint API - serverless workload footprint estimator
//!
//! Serves the estimation pipeline over HTTP, alongside liveness,
//! readiness and Prometheus metrics endpoints.

use anyhow::{Context, Result};
use footprint_api::{
    api,
    config::{LogFormat, ServiceConfig},
};
use footprint_lib::{EstimatorMetrics, HealthRegistry, StructuredLogger};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;
    init_tracing(config.log_format);

    info!(service = %config.service_name, "Starting footprint-api");

    let health_registry = HealthRegistry::new(SERVICE_VERSION);
    let metrics = EstimatorMetrics::new();
    let logger = StructuredLogger::new(&config.service_name);

    let app_state = Arc::new(api::AppState::new(
        health_registry.clone(),
        metrics,
        logger.clone(),
    ));

    health_registry.warm_up().await;

    let addr = config.listen_addr();
    logger.log_startup(SERVICE_VERSION, &addr);

    let shutdown = api::drain_on(
        tokio::signal::ctrl_c(),
        health_registry.clone(),
        logger.clone(),
    );

    api::serve(&addr, app_state, shutdown)
        .await
        .with_context(|| format!("API server on {} failed", addr))?;

    info!("Shut down");
    Ok(())
}
