//! pgprobe binary entry point.
//!
//! Reads configuration from flags and the environment, initializes tracing,
//! builds the router and serves it until the process is killed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pgprobe::config::{AppConfig, LogFormat};
use pgprobe::{create_router, http, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    let filter = tracing_subscriber::EnvFilter::new(&config.logging.log_level);
    match config.logging.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    let db = &config.database;
    tracing::info!(
        host = db.host.as_deref().unwrap_or("<default>"),
        port = db.port,
        database = db.database.as_deref().unwrap_or("<default>"),
        has_auth = db.has_credentials(),
        probe_timeout_secs = ?db.probe_timeout_secs,
        "Database probe configured"
    );

    let app = create_router(AppState::new(&config.database));

    http::start_server(app, &config.http).await?;

    Ok(())
}
