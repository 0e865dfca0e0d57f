//! Configuration management for Geogate
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default HERE geocode endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://geocode.search.hereapi.com/v1/geocode";
/// Default HERE autocomplete endpoint
pub const DEFAULT_AUTOCOMPLETE_URL: &str = "https://autocomplete.search.hereapi.com/v1/autocomplete";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Server-held HERE API key, injected into every upstream call.
    /// Never logged, never echoed to clients.
    pub here_api_key: String,

    /// HERE geocode base URL
    pub geocode_url: String,
    /// HERE autocomplete base URL
    pub autocomplete_url: String,

    /// Sentry DSN for error reporting (reporting disabled when unset)
    pub sentry_dsn: Option<String>,

    /// Timeout for upstream calls (in seconds)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("GEOGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GEOGATE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid GEOGATE_PORT")?,

            here_api_key: env::var("HERE_API_KEY").context("HERE_API_KEY must be set")?,

            geocode_url: env::var("HERE_GEOCODE_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODE_URL.to_string()),
            autocomplete_url: env::var("HERE_AUTOCOMPLETE_URL")
                .unwrap_or_else(|_| DEFAULT_AUTOCOMPLETE_URL.to_string()),

            sentry_dsn: env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty()),

            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
        })
    }
}
