use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;

/// Failure of a database probe.
///
/// Connection, authentication, TLS and query failures all surface as `Client`
/// with the message produced by the PostgreSQL client.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("{0}")]
    Client(#[from] sqlx::Error),

    #[error("probe timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}

impl IntoResponse for DatabaseError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Database probe failed");

        // The client message is returned verbatim to the caller.
        let body = format!("db_error: {self}\n");

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
