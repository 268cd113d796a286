//! Liveness and database readiness at `GET /health`.
//!
//! Answers 503 while the database is unreachable so a load balancer stops
//! routing staff traffic to an instance that cannot serve it.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the database ping, absent when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_latency_ms: Option<u64>,
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let ping = clinic_db::health_check(&state.pool).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let (code, body) = match ping {
        Ok(()) => (
            StatusCode::OK,
            HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                db_healthy: true,
                db_latency_ms: Some(elapsed_ms),
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    db_healthy: false,
                    db_latency_ms: None,
                },
            )
        }
    };
    (code, Json(body))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
