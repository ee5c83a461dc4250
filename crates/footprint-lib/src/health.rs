//! Health and readiness state for the estimator service
//!
//! The estimator itself is stateless, so health only tracks whether the
//! service has finished warming up and when it started.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::estimator;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Still serving, but shutting down
    Draining,
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub started_at: i64,
    pub uptime_secs: i64,
    /// Regions with a known grid intensity
    pub known_regions: usize,
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug)]
struct State {
    ready: bool,
    draining: bool,
}

/// Shared health state, cheap to clone
#[derive(Debug, Clone)]
pub struct HealthRegistry {
    state: Arc<RwLock<State>>,
    version: String,
    started_at: i64,
}

impl HealthRegistry {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                ready: false,
                draining: false,
            })),
            version: version.into(),
            started_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Build the grid-intensity table and mark the service ready
    pub async fn warm_up(&self) {
        let regions = estimator::known_regions().len();
        tracing::debug!(regions, "Grid intensity table loaded");
        self.set_ready(true).await;
    }

    pub async fn set_ready(&self, ready: bool) {
        self.state.write().await.ready = ready;
    }

    /// Stop accepting new traffic ahead of shutdown
    pub async fn start_draining(&self) {
        let mut state = self.state.write().await;
        state.draining = true;
        state.ready = false;
    }

    pub async fn health(&self) -> HealthResponse {
        let draining = self.state.read().await.draining;
        let now = chrono::Utc::now().timestamp();

        HealthResponse {
            status: if draining {
                HealthStatus::Draining
            } else {
                HealthStatus::Healthy
            },
            version: self.version.clone(),
            started_at: self.started_at,
            uptime_secs: (now - self.started_at).max(0),
            known_regions: estimator::known_regions().len(),
        }
    }

    pub async fn readiness(&self) -> ReadinessResponse {
        let state = self.state.read().await;

        if state.draining {
            ReadinessResponse {
                ready: false,
                reason: Some("Service shutting down".to_string()),
            }
        } else if !state.ready {
            ReadinessResponse {
                ready: false,
                reason: Some("Service not yet initialized".to_string()),
            }
        } else {
            ReadinessResponse {
                ready: true,
                reason: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_initial_state() {
        let registry = HealthRegistry::new("0.1.0");
        let health = registry.health().await;

        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.version, "0.1.0");
        assert_eq!(health.known_regions, 7);
        assert!(health.uptime_secs >= 0);
    }

    #[tokio::test]
    async fn test_readiness_not_ready_initially() {
        let registry = HealthRegistry::new("0.1.0");
        let readiness = registry.readiness().await;

        assert!(!readiness.ready);
        assert!(readiness.reason.is_some());
    }

    #[tokio::test]
    async fn test_ready_after_warm_up() {
        let registry = HealthRegistry::new("0.1.0");
        registry.warm_up().await;

        let readiness = registry.readiness().await;
        assert!(readiness.ready);
        assert!(readiness.reason.is_none());
    }

    #[tokio::test]
    async fn test_draining_clears_readiness() {
        let registry = HealthRegistry::new("0.1.0");
        registry.warm_up().await;
        registry.start_draining().await;

        assert!(!registry.readiness().await.ready);
        assert_eq!(registry.health().await.status, HealthStatus::Draining);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let registry = HealthRegistry::new("0.1.0");
        let clone = registry.clone();
        clone.set_ready(true).await;

        assert!(registry.readiness().await.ready);
    }
}
