//! Runtime configuration for one cadillac invocation.
//!
//! - `ConnectionConfig`: host, port and timeouts parsed from the database URL
//! - `CadillacConfig`: the database being documented and where exports go
//!
//! # Security
//! Only `CadillacConfig` holds the raw URL, and neither its `Debug` output
//! nor any log line includes it.

mod connection;

pub use connection::{ConnectionConfig, DEFAULT_MYSQL_PORT, parse_mysql_url};

use crate::Result;
use crate::error::CadillacError;
use crate::render::DocumentFormat;
use std::path::{Path, PathBuf};

/// Default export root, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "storage";

/// Explicit configuration handed to the schema reader and export command.
#[derive(Clone)]
pub struct CadillacConfig {
    database_url: String,
    database: String,
    storage_path: PathBuf,
    connection: ConnectionConfig,
}

impl std::fmt::Debug for CadillacConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CadillacConfig")
            .field("database", &self.database)
            .field("storage_path", &self.storage_path)
            .field("connection", &self.connection)
            // database_url omitted to prevent credential exposure
            .finish_non_exhaustive()
    }
}

impl CadillacConfig {
    /// Builds the configuration from a `mysql://` URL.
    ///
    /// `database` overrides the schema named in the URL path. One of the two
    /// must be present, since every query is scoped to it.
    pub fn new(
        database_url: impl Into<String>,
        database: Option<String>,
        storage_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let database_url = database_url.into();
        let connection = ConnectionConfig::from_url(&database_url)?;

        let database = database
            .filter(|name| !name.trim().is_empty())
            .or_else(|| connection.database.clone())
            .ok_or_else(|| {
                CadillacError::configuration(
                    "No database selected: set DB_DATABASE or add one to the DATABASE_URL path",
                )
            })?;

        Ok(Self {
            database_url,
            database,
            storage_path: storage_path.into(),
            connection,
        })
    }

    /// Raw connection string, for the driver only.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Schema that scopes every query.
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// `<storage>/app/export.<ext>` for the given document format.
    pub fn export_path(&self, format: DocumentFormat) -> PathBuf {
        self.storage_path
            .join("app")
            .join(format!("export.{}", format.extension()))
    }
}
