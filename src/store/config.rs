//! Store configuration
//!
//! The storage target is an explicitly constructed handle, injected where a
//! store is needed, never resolved from ambient global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the file-backed trace store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root data directory (default: "./xray-data").
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./xray-data")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Create a config rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the append-only trace log: `<data_dir>/data/traces.log`.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("data").join("traces.log")
    }

    /// Root data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
