//! Health check routes
//!
//! # Route table
//!
//! | Path | Method | Effect |
//! |------|--------|--------|
//! | /api/health | GET | gateway liveness |
//! | /api/health/upstream | GET | probe the commerce service |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "environment": "development"
//! }
//! ```

use std::time::SystemTime;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::Value;

use crate::cart::CartError;
use crate::core::{GatewayResult, GatewayState};

/// Health routes - public, no session interaction needed
pub fn router() -> Router<GatewayState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/health/upstream", get(upstream))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    environment: String,
}

/// Upstream probe reply wrapping whatever the commerce service reports.
#[derive(Serialize)]
pub struct UpstreamHealthResponse {
    status: &'static str,
    upstream: Value,
}

// Server start time (lazily initialized)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Gateway liveness. Never touches the commerce service.
pub async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        environment: state.config().environment.clone(),
    })
}

/// Round-trip to the commerce service's health endpoint. A failing
/// upstream surfaces as the standard gateway failure envelope.
pub async fn upstream(
    State(state): State<GatewayState>,
) -> GatewayResult<Json<UpstreamHealthResponse>> {
    let reply = state
        .commerce()
        .health(None)
        .await
        .map_err(CartError::from)?;

    Ok(Json(UpstreamHealthResponse {
        status: "ok",
        upstream: reply,
    }))
}
