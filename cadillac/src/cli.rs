//! Command-line interface definition.

use cadillac_core::config::DEFAULT_STORAGE_PATH;
use cadillac_core::{CadillacConfig, CadillacError, DocumentFormat, Result};
use clap::{Args, Parser};
use std::path::PathBuf;

/// Command-line interface for cadillac
#[derive(Parser, Debug)]
#[command(name = "cadillac")]
#[command(about = "Print or export the table structure of a MySQL database")]
#[command(version)]
#[command(long_about = "
cadillac - MySQL table structure reporter

Reads tables, columns and comments from information_schema and prints them
as console tables, or exports every table to one Markdown or HTML document.

EXAMPLES:
  cadillac                      List all tables
  cadillac users                Describe the columns of `users`
  cadillac --f=users --q        Print 'id','name',... for `users`
  cadillac --export             Write <storage>/app/export.md
  cadillac --export --html      Write <storage>/app/export.html
")]
pub struct Cli {
    /// Table to describe
    #[arg(value_name = "TABLE")]
    pub table: Option<String>,

    /// Export every table to a document
    #[arg(long)]
    pub export: bool,

    /// Export HTML instead of Markdown
    #[arg(long)]
    pub html: bool,

    /// Print only the column names of TABLE, comma-separated
    #[arg(long = "f", visible_alias = "fields", value_name = "TABLE")]
    pub fields: Option<String>,

    /// Wrap each column name in single quotes (with --f)
    #[arg(long = "q", visible_alias = "quote")]
    pub quote: bool,

    /// Database connection URL
    #[arg(
        long,
        env = "DATABASE_URL",
        hide_env_values = true,
        help = "MySQL connection string (credentials are never logged)"
    )]
    pub database_url: Option<String>,

    /// Schema to document; defaults to the database in the URL
    #[arg(long, env = "DB_DATABASE")]
    pub database: Option<String>,

    /// Root directory for export files
    #[arg(long, env = "CADILLAC_STORAGE", default_value = DEFAULT_STORAGE_PATH)]
    pub storage: PathBuf,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all logs except errors
    #[arg(long)]
    pub quiet: bool,
}

/// The action selected by the command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Column names of one table on a single line
    FieldList { table: String, quote: bool },
    /// Console table of one table's columns
    DescribeTable { table: String },
    /// Every table rendered into one document
    Export { format: DocumentFormat },
    /// Console table of all table names
    ListTables,
}

impl Cli {
    /// Resolves the flags to one action; the first match wins:
    /// `--f`, then a positional table, then `--export`, then listing.
    /// An empty table name counts as not given.
    pub fn action(&self) -> Action {
        if let Some(table) = non_empty(self.fields.as_deref()) {
            return Action::FieldList {
                table: table.to_string(),
                quote: self.quote,
            };
        }

        if let Some(table) = non_empty(self.table.as_deref()) {
            return Action::DescribeTable {
                table: table.to_string(),
            };
        }

        if self.export {
            return Action::Export {
                format: DocumentFormat::from_html_flag(self.html),
            };
        }

        Action::ListTables
    }

    /// Builds the runtime configuration from flags and environment.
    pub fn config(&self) -> Result<CadillacConfig> {
        let database_url = self.database_url.as_deref().ok_or_else(|| {
            CadillacError::configuration(
                "Database URL is required: set DATABASE_URL or pass --database-url",
            )
        })?;

        CadillacConfig::new(database_url, self.database.clone(), &self.storage)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
