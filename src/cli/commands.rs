//! CLI command implementations
//!
//! Commands own the runtime: main.rs stays inert, and each command builds
//! exactly the store/server/submitter wiring it needs.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::demo::run_demo_pipeline;
use crate::ingest::{IngestConfig, IngestServer};
use crate::store::{FileTraceStore, StoreConfig};
use crate::submit::StoreSubmitter;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Dispatch a parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { data_dir, port } => serve(data_dir, port),
        Command::Demo { data_dir } => demo(data_dir),
    }
}

/// Open the trace log and serve the ingestion API until interrupted.
fn serve(data_dir: PathBuf, port: u16) -> CliResult<()> {
    let store = FileTraceStore::open(&StoreConfig::new(data_dir))
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let server = IngestServer::with_config(Arc::new(store), IngestConfig::with_port(port));

    let runtime =
        Runtime::new().map_err(|e| CliError::runtime_error(format!("tokio runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::runtime_error(e.to_string()))
}

/// Run the demo pipeline once against a local store.
fn demo(data_dir: PathBuf) -> CliResult<()> {
    let store = FileTraceStore::open(&StoreConfig::new(data_dir))
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    let submitter = Arc::new(StoreSubmitter::new(Arc::new(store)));

    let runtime =
        Runtime::new().map_err(|e| CliError::runtime_error(format!("tokio runtime: {}", e)))?;
    let trace = runtime
        .block_on(run_demo_pipeline(submitter))
        .map_err(|e| CliError::demo_failed(e.to_string()))?;

    println!("recorded trace {} ({} steps)", trace.trace_id, trace.step_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_demo_command_records_trace() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli {
            command: Command::Demo {
                data_dir: temp_dir.path().to_path_buf(),
            },
        };

        run_command(cli).unwrap();

        assert!(temp_dir.path().join("data").join("traces.log").exists());
    }
}
