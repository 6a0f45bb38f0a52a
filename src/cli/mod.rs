//! CLI module for xray
//!
//! Provides command-line interface for:
//! - serve: open the trace log and serve the ingestion API
//! - demo: run the demo decision pipeline against a local store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
