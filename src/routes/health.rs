//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! It never touches the database, so it stays green while `/db` reports an outage.

/// Liveness handler.
pub async fn health() -> &'static str {
    "ok\n"
}
