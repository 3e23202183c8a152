//! MySQL schema reader.
//!
//! # Security Features
//! - Every query is a parameterized SELECT against `information_schema`
//! - The session is switched to READ ONLY on connect
//! - A server-side execution limit is set from `query_timeout`
//! - The connection URL is redacted in every error

use super::SchemaReader;
use crate::Result;
use crate::config::CadillacConfig;
use crate::error::{CadillacError, redact_database_url};
use crate::models::Column;
use async_trait::async_trait;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{MySqlPool, Row};

// Casts to CHAR avoid VARBINARY decoding issues on MySQL 8.0+.
// The sort uses the dictionary column, not the CAST alias, so names keep the
// collation SHOW TABLES sorts by (binary unless lower_case_table_names is set).
const TABLES_QUERY: &str = r#"
    SELECT CAST(TABLE_NAME AS CHAR) AS name
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ?
    ORDER BY INFORMATION_SCHEMA.TABLES.TABLE_NAME
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS COLUMN_NAME,
        CAST(COLUMN_TYPE AS CHAR) AS COLUMN_TYPE,
        CAST(COLUMN_DEFAULT AS CHAR) AS COLUMN_DEFAULT,
        CAST(IS_NULLABLE AS CHAR) AS IS_NULLABLE,
        CAST(EXTRA AS CHAR) AS EXTRA,
        CAST(COLUMN_COMMENT AS CHAR) AS COLUMN_COMMENT
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

const TABLE_COMMENT_QUERY: &str = r#"
    SELECT CAST(TABLE_COMMENT AS CHAR) AS TABLE_COMMENT
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
"#;

/// Extracts typed values from MySQL rows with table context in errors.
trait RowExt {
    fn get_field<'r, T>(&'r self, field_name: &str, table: &str) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>;
}

impl RowExt for MySqlRow {
    fn get_field<'r, T>(&'r self, field_name: &str, table: &str) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        self.try_get(field_name).map_err(|e| {
            CadillacError::connection_failed(
                format!(
                    "Failed to parse field '{}' from result for table '{}'",
                    field_name, table
                ),
                e,
            )
        })
    }
}

/// Schema reader backed by a single MySQL connection.
pub struct MySqlSchemaReader {
    pool: MySqlPool,
    database: String,
}

impl std::fmt::Debug for MySqlSchemaReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSchemaReader")
            .field("database", &self.database)
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

impl MySqlSchemaReader {
    /// Connects to the server described by `config`.
    ///
    /// The connection is established eagerly so an unreachable server fails
    /// here rather than on the first query.
    ///
    /// # Errors
    /// Returns `Connection` if the server cannot be reached or the session
    /// cannot be configured.
    pub async fn connect(config: &CadillacConfig) -> Result<Self> {
        use sqlx::Executor;

        let connection = config.connection();
        let query_timeout_ms = connection.query_timeout.as_millis();
        let read_only = connection.read_only;

        tracing::info!("Connecting to MySQL at {}", connection);

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(connection.connect_timeout)
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    conn.execute(
                        format!("SET SESSION max_execution_time = {}", query_timeout_ms).as_str(),
                    )
                    .await?;

                    if read_only {
                        conn.execute("SET SESSION TRANSACTION READ ONLY").await?;
                    }

                    Ok(())
                })
            })
            .connect(config.database_url())
            .await
            .map_err(|e| {
                CadillacError::connection_failed(
                    format!(
                        "Failed to connect to {}",
                        redact_database_url(config.database_url())
                    ),
                    e,
                )
            })?;

        Ok(Self::from_pool(pool, config.database()))
    }

    /// Wraps an existing pool; queries are scoped to `database`.
    pub fn from_pool(pool: MySqlPool, database: impl Into<String>) -> Self {
        Self {
            pool,
            database: database.into(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Closes the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SchemaReader for MySqlSchemaReader {
    async fn list_tables(&self) -> Result<Vec<String>> {
        tracing::debug!("Listing tables in '{}'", self.database);

        let rows = sqlx::query(TABLES_QUERY)
            .bind(&self.database)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CadillacError::connection_failed("Failed to list tables", e))?;

        rows.iter()
            .map(|row| row.get_field("name", &self.database))
            .collect()
    }

    async fn get_columns(&self, table: &str) -> Result<Vec<Column>> {
        tracing::debug!("Reading columns of '{}.{}'", self.database, table);

        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(&self.database)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                CadillacError::connection_failed(
                    format!("Failed to read columns of table '{}'", table),
                    e,
                )
            })?;

        if rows.is_empty() {
            return Err(CadillacError::table_not_found(table));
        }

        rows.iter().map(|row| column_from_row(row, table)).collect()
    }

    async fn get_table_comment(&self, table: &str) -> Result<String> {
        let comment: Option<Option<String>> = sqlx::query_scalar(TABLE_COMMENT_QUERY)
            .bind(&self.database)
            .bind(table)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                CadillacError::connection_failed(
                    format!("Failed to read comment of table '{}'", table),
                    e,
                )
            })?;

        Ok(comment.flatten().unwrap_or_default())
    }
}

fn column_from_row(row: &MySqlRow, table: &str) -> Result<Column> {
    let is_nullable: String = row.get_field("IS_NULLABLE", table)?;
    let extra: Option<String> = row.get_field("EXTRA", table)?;
    let comment: Option<String> = row.get_field("COLUMN_COMMENT", table)?;

    Ok(Column {
        name: row.get_field("COLUMN_NAME", table)?,
        column_type: row.get_field("COLUMN_TYPE", table)?,
        default_value: row.get_field("COLUMN_DEFAULT", table)?,
        is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
        extra: extra.unwrap_or_default(),
        comment: comment.unwrap_or_default(),
    })
}
