//! Schema reader trait and its MySQL implementation.
//!
//! # Module Structure
//! - `mysql`: `information_schema` queries over a single sqlx connection
//!
//! Readers never cache: each call is a fresh query against the configured
//! database.

pub mod mysql;

pub use mysql::MySqlSchemaReader;

use crate::Result;
use crate::models::{Column, Table, TableStructure};
use async_trait::async_trait;

/// Read-only access to the tables, columns and comments of one database.
///
/// # Object Safety
/// This trait is object-safe so commands can take `&dyn SchemaReader`.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// Lists table names in the order the database reports them.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Lists the columns of `table` in ordinal order.
    ///
    /// # Errors
    /// Returns `TableNotFound` when the query matches no columns.
    async fn get_columns(&self, table: &str) -> Result<Vec<Column>>;

    /// Returns the stored comment of `table`, or `""` when there is none.
    async fn get_table_comment(&self, table: &str) -> Result<String>;

    /// Reads the comment and columns of one table.
    async fn read_table(&self, table: &str) -> Result<TableStructure> {
        let comment = self.get_table_comment(table).await?;
        let columns = self.get_columns(table).await?;

        Ok(TableStructure {
            table: Table::new(table, comment),
            columns,
        })
    }
}
