//! Error-tracking collector integration
//!
//! Exception reports are fire-and-forget: delivery and retry semantics
//! belong to the collector, not to the request path. The collector is an
//! injected collaborator so tests can swap in a counting fake without
//! touching process environment.

use std::error::Error;

use sentry::ClientInitGuard;
use tracing::info;

use crate::config::Config;

/// Sink for exception reports
pub trait ErrorReporter: Send + Sync {
    /// Report an error to the collector. Must not block the request path.
    fn capture_error(&self, error: &(dyn Error + 'static));
}

/// Reporter backed by the Sentry SDK
///
/// Relies on the hub installed by [`init`]; capture calls are no-ops when
/// the SDK was never initialized.
pub struct SentryReporter;

impl ErrorReporter for SentryReporter {
    fn capture_error(&self, error: &(dyn Error + 'static)) {
        sentry::capture_error(error);
    }
}

/// Reporter used when no DSN is configured
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn capture_error(&self, _error: &(dyn Error + 'static)) {}
}

/// Initialize the Sentry SDK when a DSN is configured
///
/// The returned guard must be held for the process lifetime so buffered
/// events are flushed on shutdown. The panic integration is enabled by
/// default, so handler panics are reported even though the catch-panic
/// layer shapes the client-facing response.
pub fn init(config: &Config) -> Option<ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));
    info!("Sentry error reporting enabled");

    Some(guard)
}
