//! Footprint library for serverless workload estimation
//!
//! This crate provides the core functionality for:
//! - Normalizing declared workload sizing and traffic
//! - Instance sizing, power, energy, cost and carbon estimation
//! - Monthly forecasting
//! - Risk scoring, advice and configuration suggestions
//! - Health checks and observability

pub mod advisor;
pub mod estimator;
pub mod health;
pub mod models;
pub mod observability;

pub use estimator::{estimate, grid_intensity, Estimator};
pub use health::{HealthRegistry, HealthResponse, HealthStatus, ReadinessResponse};
pub use models::*;
pub use observability::{EstimatorMetrics, StructuredLogger};
