//! Transport Submitter
//!
//! Ships a finalized trace to the ingestion store: one attempt, no retries,
//! no backoff. Losing a trace must never fail the pipeline it is observing,
//! so transport failures go to diagnostics only and are not propagated.

use std::sync::Arc;

use crate::model::Trace;
use crate::observability::Diag;
use crate::store::TraceStore;

/// Fire-and-forget trace delivery.
///
/// The infallible signature is the contract: implementations report their
/// own failures to diagnostics and return regardless.
pub trait Submit: Send + Sync {
    /// Deliver one finalized trace. A single attempt.
    fn submit(&self, trace: &Trace);
}

/// Submitter that appends directly to a trace store.
pub struct StoreSubmitter {
    store: Arc<dyn TraceStore>,
}

impl StoreSubmitter {
    /// Create a submitter backed by the given store handle.
    pub fn new(store: Arc<dyn TraceStore>) -> Self {
        Self { store }
    }
}

impl Submit for StoreSubmitter {
    fn submit(&self, trace: &Trace) {
        match self.store.append(trace) {
            Ok(()) => {
                Diag::info(
                    "TRACE_SUBMITTED",
                    &[("trace_id", trace.trace_id.to_string())],
                );
            }
            Err(e) => {
                // Telemetry loss is logged, never propagated.
                Diag::error(
                    "SUBMIT_FAILED",
                    &[
                        ("trace_id", trace.trace_id.to_string()),
                        ("error", e.to_string()),
                    ],
                );
            }
        }
    }
}

/// Submitter that discards traces. For recorder tests.
pub struct NullSubmitter;

impl Submit for NullSubmitter {
    fn submit(&self, _trace: &Trace) {}
}
