//! CLI argument definitions using clap
//!
//! Commands:
//! - xray serve --data-dir <path> --port <port>
//! - xray demo --data-dir <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xray - decision trace capture with an append-only ingestion log
#[derive(Parser, Debug)]
#[command(name = "xray")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the ingestion API over a local trace log
    Serve {
        /// Root data directory for the trace log
        #[arg(long, default_value = "./xray-data")]
        data_dir: PathBuf,

        /// Port to bind to
        #[arg(long, default_value_t = 4100)]
        port: u16,
    },

    /// Run the demo decision pipeline once and record its trace
    Demo {
        /// Root data directory for the trace log
        #[arg(long, default_value = "./xray-data")]
        data_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
