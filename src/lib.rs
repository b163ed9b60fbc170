//! pgprobe: liveness and PostgreSQL connectivity probes over HTTP.
//!
//! `GET /health` answers as long as the process is up; `GET /db` opens a fresh
//! database connection, runs `select 1` and reports the outcome.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod probe;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::DatabaseError;
pub use probe::DbProbe;
pub use routes::create_router;
pub use state::AppState;
