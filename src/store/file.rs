//! File-backed trace store
//!
//! One JSON record per line, appended to `<data_dir>/data/traces.log`.
//! Line framing is what makes the corruption-tolerance contract workable:
//! a damaged record is confined to its own line and the reader re-syncs at
//! the next newline.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::model::Trace;
use crate::observability::Diag;

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::TraceStore;

/// Append-only, file-backed trace store.
///
/// The writer handle behind the mutex is the single-writer serialization
/// point: `append` and `truncate` contend on it, so a record is never
/// interleaved with another and never appended into a log that is being
/// cleared. Reads open the file independently and are not synchronized
/// against writers.
pub struct FileTraceStore {
    log_path: PathBuf,
    writer: Mutex<File>,
}

impl FileTraceStore {
    /// Open or create the trace log for the given config.
    ///
    /// Creates `<data_dir>/data/` if it does not exist.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let log_path = config.log_path();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::open_failed(
                    format!("Failed to create data directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| {
                StoreError::open_failed(
                    format!("Failed to open trace log: {}", log_path.display()),
                    e,
                )
            })?;

        Ok(Self {
            log_path,
            writer: Mutex::new(file),
        })
    }

    /// Returns the path of the trace log file.
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl TraceStore for FileTraceStore {
    fn append(&self, trace: &Trace) -> StoreResult<()> {
        let mut record = serde_json::to_vec(trace).map_err(|e| {
            StoreError::write_failed_no_source(format!(
                "Failed to serialize trace {}: {}",
                trace.trace_id, e
            ))
        })?;
        record.push(b'\n');

        let mut file = self.writer.lock().unwrap();

        // One write_all for the whole record: no partial line is ever
        // visible to a writer that takes the lock next.
        file.write_all(&record).map_err(|e| {
            StoreError::write_failed(format!("Failed to append trace {}", trace.trace_id), e)
        })?;

        file.sync_all().map_err(|e| {
            StoreError::write_failed(
                format!("fsync failed after appending trace {}", trace.trace_id),
                e,
            )
        })?;

        Ok(())
    }

    fn read_recent(&self, limit: usize) -> Vec<Trace> {
        let file = match File::open(&self.log_path) {
            Ok(f) => f,
            // Unavailable storage reads as empty.
            Err(_) => return Vec::new(),
        };

        let reader = BufReader::new(file);
        let mut traces = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(l) => l,
                // Lost the underlying file mid-scan; return what decoded so far.
                Err(_) => break,
            };

            let record = line.trim();
            if record.is_empty() {
                continue;
            }

            match serde_json::from_str::<Trace>(record) {
                Ok(trace) => traces.push(trace),
                Err(e) => {
                    Diag::warn(
                        "RECORD_SKIPPED",
                        &[
                            ("line", (index + 1).to_string()),
                            ("error", e.to_string()),
                        ],
                    );
                }
            }
        }

        traces.reverse();
        traces.truncate(limit);
        traces
    }

    fn truncate(&self) -> StoreResult<()> {
        let file = self.writer.lock().unwrap();

        file.set_len(0).map_err(|e| {
            StoreError::truncate_failed(
                format!("Failed to truncate trace log: {}", self.log_path.display()),
                e,
            )
        })?;

        file.sync_all().map_err(|e| {
            StoreError::truncate_failed("fsync failed after truncating trace log", e)
        })?;

        Diag::info(
            "STORE_TRUNCATED",
            &[("path", self.log_path.display().to_string())],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Step, Trace, TraceMeta, TraceStatus};
    use crate::store::DEFAULT_READ_LIMIT;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_trace(millis: i64) -> Trace {
        Trace {
            trace_id: Uuid::new_v4(),
            timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
            status: TraceStatus::Success,
            steps: vec![Step::new("search", json!({"q": "bottle"}), json!({"count": 4}), "found 4")],
            meta: TraceMeta {
                duration_ms: 100,
                environment: "test".to_string(),
            },
        }
    }

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path().join("nested"));

        let store = FileTraceStore::open(&config).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());
        let store = FileTraceStore::open(&config).unwrap();

        let trace = sample_trace(1_700_000_000_000);
        store.append(&trace).unwrap();

        let read = store.read_recent(DEFAULT_READ_LIMIT);
        assert_eq!(read.len(), 1);
        assert_eq!(read[0], trace);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());
        let store = FileTraceStore::open(&config).unwrap();

        fs::remove_file(store.path()).unwrap();
        assert!(store.read_recent(DEFAULT_READ_LIMIT).is_empty());
    }

    #[test]
    fn test_reopen_preserves_records() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());

        {
            let store = FileTraceStore::open(&config).unwrap();
            store.append(&sample_trace(1)).unwrap();
            store.append(&sample_trace(2)).unwrap();
        }

        let store = FileTraceStore::open(&config).unwrap();
        assert_eq!(store.read_recent(DEFAULT_READ_LIMIT).len(), 2);

        store.append(&sample_trace(3)).unwrap();
        assert_eq!(store.read_recent(DEFAULT_READ_LIMIT).len(), 3);
    }

    #[test]
    fn test_truncate_then_append() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());
        let store = FileTraceStore::open(&config).unwrap();

        store.append(&sample_trace(1)).unwrap();
        store.truncate().unwrap();
        assert!(store.read_recent(DEFAULT_READ_LIMIT).is_empty());

        let trace = sample_trace(2);
        store.append(&trace).unwrap();
        let read = store.read_recent(DEFAULT_READ_LIMIT);
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].trace_id, trace.trace_id);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::new(temp_dir.path());
        let store = FileTraceStore::open(&config).unwrap();

        store.append(&sample_trace(1)).unwrap();
        {
            let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
            file.write_all(b"\n\n").unwrap();
        }
        store.append(&sample_trace(2)).unwrap();

        assert_eq!(store.read_recent(DEFAULT_READ_LIMIT).len(), 2);
    }
}
