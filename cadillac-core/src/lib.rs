//! Core library for cadillac.
//!
//! Reads table and column definitions from a MySQL database's
//! `information_schema` and renders them as console tables, field lists, or
//! Markdown/HTML documents.
//!
//! # Architecture
//! - `reader`: the `SchemaReader` trait and its MySQL implementation
//! - `render`: console tables, field lists, and askama document templates
//! - `config`: explicit per-invocation configuration (no global state)
//! - `error`: one error enum with credential-free messages
//!
//! All database operations are read-only.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use config::{CadillacConfig, ConnectionConfig};
pub use error::{CadillacError, Result};
pub use logging::init_logging;
pub use models::{Column, Table, TableStructure};
pub use reader::{MySqlSchemaReader, SchemaReader};
pub use render::DocumentFormat;
