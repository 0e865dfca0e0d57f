//! Geogate - Edge proxy for the HERE geocoding APIs
//!
//! This library provides the core functionality for the Geogate proxy server.
//! It forwards geocode/autocomplete requests to the HERE provider with the
//! server-held API key injected, relaying the provider's JSON response and
//! status code back to the caller unchanged.

pub mod config;
pub mod error;
pub mod proxy;
pub mod report;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult, ProxyError};
pub use crate::proxy::HereClient;
pub use crate::report::{ErrorReporter, NoopReporter, SentryReporter};

/// Application state shared across all request handlers
///
/// Everything here is read-only after startup; requests hold no state of
/// their own beyond their own transient values.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    /// Error-tracking collector, fire-and-forget
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // HTTP client with connection pooling, shared by all requests
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(
                config.upstream_timeout_seconds,
            ))
            .build()?;

        let reporter: Arc<dyn ErrorReporter> = if config.sentry_dsn.is_some() {
            Arc::new(SentryReporter)
        } else {
            Arc::new(NoopReporter)
        };

        Ok(Self {
            config,
            http_client,
            reporter,
        })
    }

    /// Create a new application state for testing with mocked upstream URLs
    /// and an injected reporter
    ///
    /// The caller points `config` at a wiremock server and passes a counting
    /// fake reporter to assert on collector traffic.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            reporter,
        }
    }
}
