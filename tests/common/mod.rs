//! Common test utilities for Geogate
//!
//! Shared fixtures: a test configuration pointing at a wiremock upstream,
//! a counting fake error reporter, and an app builder that wires both into
//! an axum-test server.

#![allow(dead_code)]

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum_test::TestServer;
use wiremock::{Match, Request};

use geogate::{AppState, Config, ErrorReporter};

/// Test configuration constants
pub mod constants {
    /// Server-held secret injected into upstream calls
    pub const TEST_HERE_API_KEY: &str = "test-here-api-key";
}

/// Fake error-tracking collector that counts reports
#[derive(Default)]
pub struct CountingReporter {
    reports: AtomicUsize,
}

impl CountingReporter {
    pub fn count(&self) -> usize {
        self.reports.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for CountingReporter {
    fn capture_error(&self, _error: &(dyn Error + 'static)) {
        self.reports.fetch_add(1, Ordering::SeqCst);
    }
}

/// Create a test config with both upstream URLs under `upstream_base`
pub fn test_config(upstream_base: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        here_api_key: constants::TEST_HERE_API_KEY.to_string(),
        geocode_url: format!("{}/v1/geocode", upstream_base),
        autocomplete_url: format!("{}/v1/autocomplete", upstream_base),
        sentry_dsn: None,
        upstream_timeout_seconds: 5,
    }
}

/// Build a test server plus a handle on its fake reporter
pub fn build_app(config: Config) -> (TestServer, Arc<CountingReporter>) {
    let reporter = Arc::new(CountingReporter::default());
    let state = Arc::new(AppState::new_for_testing(config, reporter.clone()));
    let server = TestServer::new(geogate::routes::create_router(state))
        .expect("failed to start test server");
    (server, reporter)
}

/// Matcher asserting the exact raw query string of the outbound request
pub struct ExactQuery(pub String);

impl Match for ExactQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0.as_str())
    }
}

/// Matcher asserting a substring never appears in the outbound query
pub struct QueryNeverContains(pub String);

impl Match for QueryNeverContains {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query().unwrap_or("").contains(&self.0)
    }
}
