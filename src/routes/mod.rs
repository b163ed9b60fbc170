//! HTTP route handlers.
//!
//! Two literal request targets are served, each for every HTTP method; anything
//! else, including either path with a query string, gets a plain 404. All
//! responses are marked uncacheable.

pub mod db;
pub mod health;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        StatusCode,
    },
    middleware,
    routing::any,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::{exact_target_layer, trace_layer};
use crate::state::AppState;

/// Fallback for every path other than the probes.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found\n")
}

/// Creates the Axum router with both probe routes and the 404 fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health::health))
        .route("/db", any(db::db))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(exact_target_layer))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ))
        // Outermost, so rejected targets are traced too
        .layer(middleware::from_fn(trace_layer))
}
