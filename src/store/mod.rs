//! Ingestion Log Store
//!
//! Durable append-only sink for finalized traces. One self-contained record
//! per trace, appended in sequence; reads replay the most recent N
//! newest-first; truncate resets the log atomically.
//!
//! # Design Principles
//!
//! - Append-only (no in-place updates, no read-before-write)
//! - Whole-record appends behind a single writer lock - concurrent
//!   producers never interleave
//! - Read path favors availability: undecodable records are skipped,
//!   unavailable storage reads as empty
//! - Write path favors honesty: a lost append is surfaced to the producer
//!
//! The store is handed around as an explicit handle (`Arc<dyn TraceStore>`)
//! built from a [`StoreConfig`]; nothing resolves it from ambient global
//! state, so tests substitute [`MemoryTraceStore`] freely.

mod config;
mod errors;
mod file;
mod memory;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use file::FileTraceStore;
pub use memory::MemoryTraceStore;

use crate::model::Trace;

/// Default number of traces returned by a bounded read.
pub const DEFAULT_READ_LIMIT: usize = 50;

/// Durable append-only trace sink.
pub trait TraceStore: Send + Sync {
    /// Append one trace as a self-contained record.
    ///
    /// O(1) in existing log size; the whole record is written atomically
    /// with respect to other concurrent `append` calls. Write failures are
    /// surfaced: a lost write must be knowable by the producer.
    fn append(&self, trace: &Trace) -> StoreResult<()>;

    /// Return up to `limit` traces, newest-first.
    ///
    /// Records that fail to decode are skipped; unavailable or empty
    /// storage yields an empty vector. This path never errors - the store
    /// is a monitoring sink, not a system of record.
    fn read_recent(&self, limit: usize) -> Vec<Trace>;

    /// Atomically empty the log. Idempotent: truncating an empty log is a
    /// no-op success. Mutually exclusive with concurrent appends.
    fn truncate(&self) -> StoreResult<()>;
}
