//! HERE API proxy client
//!
//! Handles request forwarding to the HERE geocoding endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::error::ProxyError;
use crate::proxy::query::sanitize_query;

/// A relayed upstream response: exact status code plus the JSON body,
/// both passed through to the caller unchanged in shape
#[derive(Debug)]
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl IntoResponse for ProxiedResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// HERE API client
pub struct HereClient {
    client: reqwest::Client,
    api_key: String,
}

impl HereClient {
    /// Create a new HERE client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.here_api_key.clone(),
        }
    }

    /// Forward a request to a HERE endpoint
    ///
    /// Sanitizes the caller's raw query string, issues a GET against
    /// `base_url` with no body and no caller headers relayed, and returns
    /// the upstream's exact status together with its JSON body. Non-2xx
    /// upstream statuses are relayed, not treated as errors. Any failure
    /// on the way is terminal; no retry is attempted.
    pub async fn proxy(
        &self,
        base_url: &str,
        raw_query: &str,
    ) -> Result<ProxiedResponse, ProxyError> {
        let query = sanitize_query(raw_query, &self.api_key);
        let url = format!("{}?{}", base_url, query);

        // The outbound URL carries the key; log the endpoint only.
        debug!(endpoint = %base_url, "Forwarding request upstream");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProxyError::Upstream(e.without_url()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.without_url()))?;

        let body: serde_json::Value = serde_json::from_slice(&bytes)?;

        Ok(ProxiedResponse { status, body })
    }
}
