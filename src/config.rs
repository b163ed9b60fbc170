//! Configuration loading and constants.
//!
//! Every setting is read once at startup from the process environment, or from the
//! matching command-line flag when one is given (flags win over the environment).
//! `AppConfig` is the root configuration struct containing all settings.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

// =============================================================================
// HTTP
// =============================================================================

/// Default listen address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port when `PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Probe results must never be served from an intermediate cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL host when `PGHOST` is not set (always TCP, never a Unix socket)
pub const DEFAULT_PG_HOST: &str = "localhost";

/// Default PostgreSQL port when `PGPORT` is not set
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Validation query run by the database probe
pub const PROBE_QUERY: &str = "select 1";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "pgprobe=info,tower_http=info";

/// Liveness and PostgreSQL connectivity probes over HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "pgprobe", version, about)]
pub struct AppConfig {
    #[command(flatten)]
    pub http: HttpConfig,
    #[command(flatten)]
    pub database: DatabaseConfig,
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse configuration from command-line flags and the process environment.
    ///
    /// Exits the process with a usage error if a value cannot be parsed
    /// (for example a non-numeric `PGPORT`).
    pub fn load() -> Self {
        Self::parse()
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Args)]
pub struct HttpConfig {
    /// Address to listen on
    #[arg(long = "host", env = "HTTP_HOST", default_value = DEFAULT_HTTP_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_HTTP_PORT)]
    pub port: u16,
}

impl HttpConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Connection parameters for the database probe.
///
/// An unset host means TCP to `localhost`; unset user and database fall back to
/// the PostgreSQL client defaults (the current OS user, and a database named after it).
#[derive(Clone, Args)]
pub struct DatabaseConfig {
    /// Database host
    #[arg(id = "pg_host", long = "pg-host", env = "PGHOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(id = "pg_port", long = "pg-port", env = "PGPORT", default_value_t = DEFAULT_PG_PORT)]
    pub port: u16,

    /// Database user
    #[arg(long = "pg-user", env = "PGUSER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long = "pg-password", env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database name
    #[arg(long = "pg-database", env = "PGDATABASE")]
    pub database: Option<String>,

    /// Upper bound in seconds for a whole probe (connect, query, close).
    /// Unset means no limit beyond the client and network defaults.
    #[arg(long = "probe-timeout-secs", env = "DB_PROBE_TIMEOUT_SECS")]
    pub probe_timeout_secs: Option<u64>,
}

impl DatabaseConfig {
    /// Build client options for a single probe connection.
    ///
    /// TLS is required but the server certificate is not verified.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(self.host.as_deref().unwrap_or(DEFAULT_PG_HOST))
            .port(self.port)
            .ssl_mode(PgSslMode::Require);

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }

        options
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(Duration::from_secs)
    }

    pub fn has_credentials(&self) -> bool {
        self.user.is_some() && self.password.is_some()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "pgprobe=debug,tower_http=info")
    #[arg(short, long = "log-level", env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,

    /// Log output format
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

/// Log output format: human-readable text or one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
