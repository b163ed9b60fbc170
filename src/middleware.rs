//! Request middleware: exact-target matching and per-request tracing.
//!
//! The probes answer only their bare paths, so any request target carrying a
//! query string (even a lone `?`) is turned away with 404 before routing.
//! Every request runs inside a `request` span keyed by a UUID; the `/db`
//! handler records the probe outcome on that span as `db`.

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::routes::not_found;

/// Answers 404 for any request whose target has a query component.
pub async fn exact_target_layer(request: Request, next: Next) -> Response {
    if request.uri().query().is_some() {
        return not_found().await.into_response();
    }
    next.run(request).await
}

/// Wraps the request in a span and logs its outcome once the response is ready.
///
/// Server errors (a failed `/db` probe) are logged at `warn`, everything else at `info`.
pub async fn trace_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %request.method(),
        target = %request.uri(),
        db = tracing::field::Empty,
    );

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed = started.elapsed();
    let status = response.status();

    span.in_scope(|| {
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), ?elapsed, "Probe failed");
        } else {
            tracing::info!(status = status.as_u16(), ?elapsed, "Served");
        }
    });

    response
}
