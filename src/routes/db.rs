//! Database connectivity endpoint.

use axum::extract::State;

use crate::error::DatabaseError;
use crate::state::AppState;

/// Runs the database probe for this request.
///
/// Returns 200 `db_ok` on success; failures render through `DatabaseError`
/// as a 500 carrying the client's message. The outcome is also recorded on
/// the enclosing request span.
pub async fn db(State(state): State<AppState>) -> Result<&'static str, DatabaseError> {
    let result = state.probe.check().await;
    let outcome = if result.is_ok() { "ok" } else { "error" };
    tracing::Span::current().record("db", outcome);

    result?;
    Ok("db_ok\n")
}
