//! HTTP API for estimates, health checks and Prometheus metrics

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use footprint_lib::{
    EstimateInput, EstimateResult, Estimator, EstimatorMetrics, HealthRegistry, StructuredLogger,
};
use prometheus::{Encoder, TextEncoder};
use std::{future::Future, sync::Arc, time::Instant};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

const BANNER: &str = "Serverless Footprint Estimator API";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub estimator: Estimator,
    pub health_registry: HealthRegistry,
    pub metrics: EstimatorMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(
        health_registry: HealthRegistry,
        metrics: EstimatorMetrics,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            estimator: Estimator::new(),
            health_registry,
            metrics,
            logger,
        }
    }
}

/// Run the estimation pipeline on a JSON body; the Content-Type header is not required
async fn estimate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EstimateResult>, ApiError> {
    let input: EstimateInput = serde_json::from_slice(&body).map_err(|err| {
        let err = ApiError::from(err);
        state.metrics.inc_rejected_requests();
        state.logger.log_rejected(&err.to_string());
        err
    })?;

    let started = Instant::now();
    let evaluation = state.estimator.evaluate(input);
    state
        .metrics
        .observe_estimate(&evaluation, started.elapsed().as_secs_f64());
    state.logger.log_estimate(&evaluation);

    Ok(Json(evaluation.result))
}

async fn estimate_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn root() -> &'static str {
    BANNER
}

/// Liveness: 200 while the process can serve
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.health_registry.health().await))
}

/// Readiness: 200 if ready, 503 otherwise
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %err, "Failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}

/// Browser callers are allowed from any origin; the origin is mirrored back
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS, Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/estimate",
            axum::routing::post(estimate)
                .options(estimate_preflight)
                .fallback(method_not_allowed),
        )
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .layer(cors_layer())
        .with_state(state)
}

/// Resolve once `signal` fires, marking the service as draining first.
///
/// A signal listener that fails to install never resolves, so the server keeps running.
pub async fn drain_on(
    signal: impl Future<Output = std::io::Result<()>>,
    health_registry: HealthRegistry,
    logger: StructuredLogger,
) {
    if let Err(err) = signal.await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    health_registry.start_draining().await;
    logger.log_shutdown("SIGINT received");
}

/// Start the API server and stop accepting connections once `shutdown` resolves
pub async fn serve(
    addr: &str,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = create_router(state);

    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
