//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use pgprobe::config::DatabaseConfig;
use pgprobe::{create_router, AppState};

/// Database settings pointing at `127.0.0.1:<pg_port>`.
pub fn test_database(pg_port: u16, probe_timeout_secs: Option<u64>) -> DatabaseConfig {
    DatabaseConfig {
        host: Some("127.0.0.1".to_string()),
        port: pg_port,
        user: Some("probe".to_string()),
        password: Some("probe".to_string()),
        database: Some("probe".to_string()),
        probe_timeout_secs,
    }
}

/// A local port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Router whose database probe can never connect.
pub async fn app_without_database() -> Router {
    create_router(AppState::new(&test_database(closed_port().await, None)))
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
