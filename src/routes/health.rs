//! Health check endpoint
//!
//! `GET /health` - liveness check with a current timestamp. No side
//! effects and no dependency probing; the proxy holds no connections
//! worth checking beyond the lazily-built upstream pool.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Current time, ISO-8601
    pub timestamp: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
