//! Output rendering: console tables, field lists, and exported documents.
//!
//! # Module Structure
//! - `console`: aligned box tables for terminal output
//! - `document`: Markdown and HTML documents built from askama templates

pub mod console;
pub mod document;

pub use console::ConsoleTable;
pub use document::{DocumentFormat, render_document};

use crate::models::{COLUMN_HEADERS, Column};

/// Joins column names with `,`, wrapping each in single quotes when `quote`
/// is set.
///
/// ```rust
/// use cadillac_core::models::Column;
/// use cadillac_core::render::field_list;
///
/// let columns: Vec<Column> = ["id", "name"]
///     .into_iter()
///     .map(|name| Column {
///         name: name.to_string(),
///         column_type: "int".to_string(),
///         default_value: None,
///         is_nullable: false,
///         extra: String::new(),
///         comment: String::new(),
///     })
///     .collect();
///
/// assert_eq!(field_list(&columns, false), "id,name");
/// assert_eq!(field_list(&columns, true), "'id','name'");
/// ```
pub fn field_list(columns: &[Column], quote: bool) -> String {
    columns
        .iter()
        .map(|column| {
            if quote {
                format!("'{}'", column.name)
            } else {
                column.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Console table describing the columns of one table.
pub fn columns_table(columns: &[Column]) -> ConsoleTable {
    let mut table = ConsoleTable::new(COLUMN_HEADERS);
    for column in columns {
        table.add_row(column.cells());
    }
    table
}

/// Single-column console table listing table names.
pub fn tables_table<S: AsRef<str>>(names: &[S]) -> ConsoleTable {
    let mut table = ConsoleTable::new(["Table"]);
    for name in names {
        table.add_row([name.as_ref()]);
    }
    table
}
