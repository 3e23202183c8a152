//! Schema models read from `information_schema`.
//!
//! Every value here is a fresh projection of one query result; nothing is
//! cached or mutated after it is built.

/// A table and its optional comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    /// Empty when the table has no stored comment
    pub comment: String,
}

impl Table {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
        }
    }

    /// Document heading for this table: `name` or `name(comment)`.
    pub fn title(&self) -> String {
        if self.comment.is_empty() {
            self.name.clone()
        } else {
            format!("{}({})", self.name, self.comment)
        }
    }
}

/// One row of `information_schema.COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Declared type, e.g. `varchar(255)` or `int unsigned`
    pub column_type: String,
    pub default_value: Option<String>,
    pub is_nullable: bool,
    /// Extra attributes such as `auto_increment`
    pub extra: String,
    pub comment: String,
}

impl Column {
    /// `YES` / `NO`, as MySQL reports `IS_NULLABLE`.
    pub fn nullable_label(&self) -> &'static str {
        if self.is_nullable { "YES" } else { "NO" }
    }

    /// Default value with NULL rendered as an empty string.
    pub fn default_label(&self) -> &str {
        self.default_value.as_deref().unwrap_or("")
    }

    /// The six cells shown for this column in every table rendering.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.column_type.as_str(),
            self.default_label(),
            self.nullable_label(),
            self.extra.as_str(),
            self.comment.as_str(),
        ]
    }
}

/// Header row matching [`Column::cells`].
pub const COLUMN_HEADERS: [&str; 6] = ["Column", "Type", "Default", "Nullable", "Extra", "Comment"];

/// A table together with its columns, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStructure {
    pub table: Table,
    pub columns: Vec<Column>,
}
