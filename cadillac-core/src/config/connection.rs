//! MySQL connection settings parsed from a `mysql://` URL.

use crate::Result;
use crate::error::CadillacError;
use std::time::Duration;
use url::Url;

/// Default MySQL port used when the URL names none.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Configuration for the database connection.
///
/// # Security
/// Credentials stay in the database URL and are never copied here.
///
/// # Example
/// ```rust
/// use cadillac_core::config::ConnectionConfig;
///
/// let config = ConnectionConfig::new("localhost".to_string())
///     .with_port(3306)
///     .with_database("shop".to_string());
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database host address
    pub host: String,
    /// Optional port number
    pub port: Option<u16>,
    /// Database named in the URL path, if any
    pub database: Option<String>,
    /// Time allowed to establish the connection
    pub connect_timeout: Duration,
    /// Server-side limit for each query
    pub query_timeout: Duration,
    /// Whether to switch the session to READ ONLY
    pub read_only: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            database: None,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(30),
            read_only: true,
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.host,
            self.port.map_or_else(String::new, |p| format!(":{}", p)),
            self.database
                .as_ref()
                .map_or_else(String::new, |db| format!("/{}", db))
        )
        // Credentials are never shown
    }
}

impl ConnectionConfig {
    /// Validates connection configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(CadillacError::configuration("host cannot be empty"));
        }

        if self.port == Some(0) {
            return Err(CadillacError::configuration("port must be greater than 0"));
        }

        if self.connect_timeout.is_zero() {
            return Err(CadillacError::configuration(
                "connect_timeout must be greater than 0",
            ));
        }

        if self.query_timeout.is_zero() {
            return Err(CadillacError::configuration(
                "query_timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Creates a new connection config with safe defaults.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    /// Builder method to set port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Parses a `mysql://` URL into a validated configuration.
    ///
    /// Recognized query parameters: `connect_timeout` and `query_timeout`
    /// (seconds, 1-300). Anything else is left for the driver.
    pub fn from_url(connection_string: &str) -> Result<Self> {
        let url = parse_mysql_url(connection_string)?;

        let mut config = Self::new(url.host_str().unwrap_or("localhost").to_string())
            .with_port(url.port().unwrap_or(DEFAULT_MYSQL_PORT));

        let database = url.path().trim_start_matches('/');
        if !database.is_empty() {
            if database.len() > 64 {
                return Err(CadillacError::configuration(
                    "Database name too long: maximum 64 characters",
                ));
            }
            config = config.with_database(database.to_string());
        }

        for (key, value) in url.query_pairs() {
            let seconds = value
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=300).contains(secs));
            match (key.as_ref(), seconds) {
                ("connect_timeout", Some(secs)) => {
                    config.connect_timeout = Duration::from_secs(secs);
                }
                ("query_timeout", Some(secs)) => {
                    config.query_timeout = Duration::from_secs(secs);
                }
                _ => {}
            }
        }

        config.validate()?;
        Ok(config)
    }
}

/// Checks the scheme and host of a MySQL connection string.
pub fn parse_mysql_url(connection_string: &str) -> Result<Url> {
    let url = Url::parse(connection_string).map_err(|e| {
        CadillacError::configuration(format!("Invalid MySQL connection string format: {}", e))
    })?;

    if url.scheme() != "mysql" {
        return Err(CadillacError::configuration(
            "Connection string must use mysql:// scheme",
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(CadillacError::configuration(
            "Connection string must specify a host",
        ));
    }

    Ok(url)
}
