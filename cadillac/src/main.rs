//! MySQL table structure reporter.
//!
//! Connects with `DATABASE_URL`, reads `information_schema`, and prints a
//! console report or writes a Markdown/HTML export.
//!
//! # Security Guarantees
//! - Read-only session, SELECT queries only
//! - Database URLs are redacted in every log line and error

use anyhow::Context;
use cadillac::{Cli, CommandContext, dispatch};
use cadillac_core::{MySqlSchemaReader, init_logging};
use clap::Parser;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let config = cli.config()?;
    let action = cli.action();
    info!("Running {:?} against database '{}'", action, config.database());

    let reader = MySqlSchemaReader::connect(&config)
        .await
        .context("Cannot reach the database")?;

    let command = dispatch(action);
    let mut stdout = std::io::stdout();
    let mut ctx = CommandContext {
        reader: &reader,
        config: &config,
        out: &mut stdout,
    };

    let result = command.execute(&mut ctx).await;
    reader.close().await;

    // anyhow reports the error chain on exit
    result?;

    Ok(())
}
