//! Error types for Geogate
//!
//! This module defines custom error types used throughout the application.
//! All failures are converted to generic client-facing bodies at the
//! response boundary; internal detail never reaches the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures on the proxy path
///
/// Every variant is terminal for the request and collapses to a
/// `{"error":"Proxy error"}` 500 at the boundary. Upstream non-2xx
/// statuses are NOT errors and never appear here.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound call failed (connect, timeout, read). Constructed with
    /// `reqwest::Error::without_url` so the key-bearing URL never reaches
    /// logs or the collector.
    #[error("upstream request failed: {0}")]
    Upstream(reqwest::Error),

    /// The upstream body was not parseable as JSON
    #[error("upstream returned a non-JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Proxy(#[from] ProxyError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Proxy(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Proxy error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
