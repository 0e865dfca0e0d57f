//! Geocode and autocomplete proxy handlers
//!
//! Both handlers run the same pipeline against different upstream base
//! URLs: sanitize the caller's query string, inject the server-held API
//! key, forward, and relay the upstream's JSON body and status verbatim.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{RawQuery, State};
use tracing::{error, info};

use crate::{
    error::AppError,
    proxy::{HereClient, ProxiedResponse},
    AppState,
};

/// `GET /geocode` - proxy to the HERE geocode endpoint
pub async fn geocode(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<ProxiedResponse, AppError> {
    let base_url = state.config.geocode_url.clone();
    forward(&state, "/geocode", &base_url, query).await
}

/// `GET /autocomplete` - proxy to the HERE autocomplete endpoint
pub async fn autocomplete(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<ProxiedResponse, AppError> {
    let base_url = state.config.autocomplete_url.clone();
    forward(&state, "/autocomplete", &base_url, query).await
}

/// Shared proxy pipeline
///
/// On failure the error is reported to the collector exactly once, logged
/// without the key-bearing URL, and surfaced as the generic proxy 500.
async fn forward(
    state: &AppState,
    path: &str,
    base_url: &str,
    query: Option<String>,
) -> Result<ProxiedResponse, AppError> {
    let start_time = Instant::now();
    let client = HereClient::new(state.http_client.clone(), &state.config);

    match client.proxy(base_url, query.as_deref().unwrap_or("")).await {
        Ok(response) => {
            info!(
                path = %path,
                status = %response.status,
                duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
                "Proxied request completed"
            );
            Ok(response)
        }
        Err(err) => {
            state.reporter.capture_error(&err);
            error!(path = %path, error = %err, "Proxied request failed");
            Err(AppError::Proxy(err))
        }
    }
}
