//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HttpConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind the listening socket for the configured address.
pub async fn bind(config: &HttpConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener.
///
/// Each accepted connection is handled on its own task. This only returns if
/// the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening on {}", addr.port());

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the configured address and serve `app` on it.
///
/// This function blocks until the server stops.
pub async fn start_server(app: Router, config: &HttpConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}
