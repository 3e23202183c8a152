//! The four cadillac actions and their dispatcher.
//!
//! Each action is a small struct implementing [`Command`]. Commands receive
//! everything they touch through [`CommandContext`], so they run the same
//! against a live database and an in-memory reader.

use crate::cli::Action;
use crate::output;
use async_trait::async_trait;
use cadillac_core::{
    CadillacConfig, CadillacError, DocumentFormat, Result, SchemaReader,
    render::{self, render_document},
};
use std::io::Write;
use tracing::{debug, info};

/// Everything a command needs for one run.
pub struct CommandContext<'a> {
    pub reader: &'a dyn SchemaReader,
    pub config: &'a CadillacConfig,
    /// Report output, normally stdout
    pub out: &'a mut (dyn Write + Send),
}

impl CommandContext<'_> {
    fn print(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", text)
            .map_err(|e| CadillacError::io("Failed to write report output", e))
    }

    fn print_block(&mut self, text: impl std::fmt::Display) -> Result<()> {
        write!(self.out, "{}", text)
            .map_err(|e| CadillacError::io("Failed to write report output", e))
    }
}

/// A single cadillac action: execute against the context, report the result.
#[async_trait]
pub trait Command: Send + Sync {
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()>;
}

/// Maps the parsed action to its command.
pub fn dispatch(action: Action) -> Box<dyn Command> {
    match action {
        Action::FieldList { table, quote } => Box::new(FieldListCommand { table, quote }),
        Action::DescribeTable { table } => Box::new(DescribeTableCommand { table }),
        Action::Export { format } => Box::new(ExportCommand { format }),
        Action::ListTables => Box::new(ListTablesCommand),
    }
}

/// Prints the column names of one table as `a,b,c` or `'a','b','c'`.
#[derive(Debug, Clone)]
pub struct FieldListCommand {
    pub table: String,
    pub quote: bool,
}

#[async_trait]
impl Command for FieldListCommand {
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let columns = ctx.reader.get_columns(&self.table).await?;
        ctx.print(render::field_list(&columns, self.quote))
    }
}

/// Prints the columns of one table as a console table.
#[derive(Debug, Clone)]
pub struct DescribeTableCommand {
    pub table: String,
}

#[async_trait]
impl Command for DescribeTableCommand {
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let columns = ctx.reader.get_columns(&self.table).await?;
        debug!("Table '{}' has {} columns", self.table, columns.len());
        ctx.print_block(render::columns_table(&columns))
    }
}

/// Prints every table name as a single-column console table.
#[derive(Debug, Clone, Copy)]
pub struct ListTablesCommand;

#[async_trait]
impl Command for ListTablesCommand {
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let tables = ctx.reader.list_tables().await?;
        debug!("Found {} tables", tables.len());
        ctx.print_block(render::tables_table(&tables))
    }
}

/// Renders every table into one document under `<storage>/app/`.
///
/// Each table title is echoed as it is read. The first failing table aborts
/// the export and nothing is written.
#[derive(Debug, Clone, Copy)]
pub struct ExportCommand {
    pub format: DocumentFormat,
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<()> {
        let start_time = std::time::Instant::now();
        let tables = ctx.reader.list_tables().await?;

        let mut structures = Vec::with_capacity(tables.len());
        for table in &tables {
            let structure = ctx.reader.read_table(table).await?;
            ctx.print(structure.table.title())?;
            structures.push(structure);
        }

        let document = render_document(self.format, ctx.config.database(), &structures)?;
        let path = ctx.config.export_path(self.format);
        output::write_export(&path, &document).await?;

        info!(
            "Exported {} tables as {} in {:.2}s",
            structures.len(),
            self.format,
            start_time.elapsed().as_secs_f64()
        );
        ctx.print(format!("export file: {}", path.display()))
    }
}
