//! Library module for the cadillac binary.
//!
//! Exposes the CLI, commands and export output for testing; `main.rs` only
//! wires them to a live MySQL connection.

pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{Action, Cli};
pub use commands::{Command, CommandContext, dispatch};
