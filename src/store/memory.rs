//! In-memory trace store
//!
//! Same contract as the file store, backed by a vector. Used by tests and
//! anywhere a process wants capture without persistence.

use std::sync::Mutex;

use crate::model::Trace;

use super::errors::StoreResult;
use super::TraceStore;

/// In-memory append-only trace store.
#[derive(Debug, Default)]
pub struct MemoryTraceStore {
    records: Mutex<Vec<Trace>>,
}

impl MemoryTraceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored traces.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl TraceStore for MemoryTraceStore {
    fn append(&self, trace: &Trace) -> StoreResult<()> {
        self.records.lock().unwrap().push(trace.clone());
        Ok(())
    }

    fn read_recent(&self, limit: usize) -> Vec<Trace> {
        let records = self.records.lock().unwrap();
        records.iter().rev().take(limit).cloned().collect()
    }

    fn truncate(&self) -> StoreResult<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TraceMeta, TraceStatus};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_trace(millis: i64) -> Trace {
        Trace {
            trace_id: Uuid::new_v4(),
            timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
            status: TraceStatus::Success,
            steps: Vec::new(),
            meta: TraceMeta {
                duration_ms: 1,
                environment: "test".to_string(),
            },
        }
    }

    #[test]
    fn test_append_and_read_newest_first() {
        let store = MemoryTraceStore::new();
        let first = sample_trace(1);
        let second = sample_trace(2);

        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let read = store.read_recent(50);
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].trace_id, second.trace_id);
        assert_eq!(read[1].trace_id, first.trace_id);
    }

    #[test]
    fn test_read_respects_limit() {
        let store = MemoryTraceStore::new();
        for i in 0..5 {
            store.append(&sample_trace(i)).unwrap();
        }
        assert_eq!(store.read_recent(3).len(), 3);
    }

    #[test]
    fn test_truncate_idempotent() {
        let store = MemoryTraceStore::new();
        store.append(&sample_trace(1)).unwrap();

        store.truncate().unwrap();
        store.truncate().unwrap();

        assert!(store.is_empty());
        assert!(store.read_recent(50).is_empty());
    }
}
