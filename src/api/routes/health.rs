//! Health Routes
//!
//! Health check endpoints for monitoring and probes.
//!
//! - GET /health/live - liveness probe (process is alive)
//! - GET /health/ready - readiness probe (store is readable)
//! - GET /health - full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    // A store read doubles as the readiness check; the store is in-memory
    // after hydration, so reachable means ready.
    let _ = state.store.content().await;
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let _ = state.store.content().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        store: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
