//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::probe::DbProbe;

/// Shared application state, cheap to clone into each handler.
///
/// Only the database probe lives here. It is built once at startup and never
/// mutated, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<DbProbe>,
}

impl AppState {
    /// Creates the state, building the probe from the database settings.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            probe: Arc::new(DbProbe::new(config)),
        }
    }
}
