//! On-demand PostgreSQL connectivity probe.
//!
//! Each call opens its own connection, runs a trivial validation query and closes
//! the connection again. There is no pool and no retry: a probe reports exactly
//! what a fresh client would see at that moment.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::instrument;

use crate::config::{DatabaseConfig, PROBE_QUERY};
use crate::error::DatabaseError;

/// Database probe built once from startup configuration and shared by handlers.
#[derive(Debug, Clone)]
pub struct DbProbe {
    options: PgConnectOptions,
    timeout: Option<Duration>,
}

impl DbProbe {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
            timeout: config.probe_timeout(),
        }
    }

    /// Connect, run the validation query and disconnect.
    ///
    /// The first failure ends the sequence and is returned to the caller.
    #[instrument(name = "db_probe", skip(self), fields(host = %self.options.get_host(), port = self.options.get_port()))]
    pub async fn check(&self) -> Result<(), DatabaseError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run())
                .await
                .map_err(|_| DatabaseError::Timeout(limit))?,
            None => self.run().await,
        }
    }

    async fn run(&self) -> Result<(), DatabaseError> {
        let mut conn = PgConnection::connect_with(&self.options).await?;
        tracing::debug!("Connected");

        let query_result = sqlx::query(PROBE_QUERY).execute(&mut conn).await;

        // Release the connection on both paths; a query error outranks a close error.
        let close_result = conn.close().await;
        query_result?;
        close_result?;

        tracing::debug!("Probe succeeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PG_PORT;
    use tokio::net::TcpListener;

    fn config_for(port: u16, timeout_secs: Option<u64>) -> DatabaseConfig {
        DatabaseConfig {
            host: Some("127.0.0.1".to_string()),
            port,
            user: Some("probe".to_string()),
            password: Some("probe".to_string()),
            database: Some("probe".to_string()),
            probe_timeout_secs: timeout_secs,
        }
    }

    /// Reserve a local port and release it so nothing is listening there.
    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_unreachable_database_reports_client_error() {
        let probe = DbProbe::new(&config_for(closed_port().await, None));

        let err = probe.check().await.unwrap_err();

        assert!(matches!(err, DatabaseError::Client(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_silent_server_hits_probe_timeout() {
        // Accepts the TCP connection but never answers the TLS request.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let mut probe = DbProbe::new(&config_for(port, None));
        probe.timeout = Some(Duration::from_millis(200));

        let err = probe.check().await.unwrap_err();

        assert!(matches!(err, DatabaseError::Timeout(d) if d == Duration::from_millis(200)));
    }

    #[test]
    fn test_probe_takes_timeout_from_config() {
        let probe = DbProbe::new(&config_for(DEFAULT_PG_PORT, Some(7)));
        assert_eq!(probe.timeout, Some(Duration::from_secs(7)));
        assert_eq!(probe.options.get_port(), DEFAULT_PG_PORT);
    }
}
