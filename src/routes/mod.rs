//! HTTP routes for Geogate
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod health;
pub mod proxy;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode},
    routing::get,
    Router,
};
use bytes::Bytes;
use http_body_util::Full;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::{error::AppError, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/geocode", get(proxy::geocode))
        .route("/autocomplete", get(proxy::autocomplete))
        .route("/health", get(health::health_check))
        // Unmatched paths and wrong methods both get the uniform 404 body
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        // Global middleware (applied to all routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for any unmatched path or method
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Shape a handler panic into the generic 500 body
///
/// The panic itself is reported by the Sentry panic integration; the
/// payload is logged here but never placed in the response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Handler panicked");

    let body = serde_json::json!({ "error": "Internal server error" }).to_string();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(Full::from(body))
        .expect("static response parts are valid")
}
