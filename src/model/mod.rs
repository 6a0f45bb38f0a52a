//! Trace data model
//!
//! The wire and storage form of a pipeline run:
//!
//! - [`Trace`] - the complete, immutable record of one run
//! - [`Step`] - one recorded unit of work, ordered by append position
//! - [`Candidate`] - one option evaluated and accepted/rejected at a step
//!
//! Open-schema payloads (`input`, `output`, candidate `data`) are
//! `serde_json::Value` - a tagged union of null/bool/number/string/sequence/map,
//! so arbitrary snapshots stay schema-flexible while serialization stays strict.
//!
//! Field names and timestamp encoding (epoch milliseconds) follow the
//! ingestion wire format consumed by the dashboard.

mod candidate;
mod step;
mod trace;

pub use candidate::{Candidate, CandidateStatus};
pub use step::Step;
pub use trace::{Trace, TraceMeta, TraceStatus};

use chrono::{DateTime, Utc};

/// Current time truncated to millisecond precision.
///
/// The wire encoding carries epoch milliseconds, so timestamps are truncated
/// at creation; a value then survives a serialize/deserialize round-trip
/// bit-for-bit.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
