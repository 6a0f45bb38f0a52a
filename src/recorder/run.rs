//! Trace recorder

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::model::{self, Step, Trace, TraceMeta, TraceStatus};
use crate::submit::Submit;

use super::explain::Explanation;

/// Records the steps of one pipeline run.
///
/// State machine: `Open -> (capture)* -> Finalized`. The recorder is `Open`
/// from construction; [`finalize`](TraceRecorder::finalize) consumes it, so
/// capturing after finalize or finalizing twice does not compile - the
/// terminal state is enforced by ownership rather than a runtime check.
///
/// One recorder per run. Runs are independent: recorders share no mutable
/// state with each other, only the injected submitter handle.
pub struct TraceRecorder {
    trace_id: Uuid,
    started_at: DateTime<Utc>,
    steps: Vec<Step>,
    submitter: Arc<dyn Submit>,
}

impl TraceRecorder {
    /// Start a run with a fresh trace id.
    pub fn new(submitter: Arc<dyn Submit>) -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            started_at: model::now_millis(),
            steps: Vec::new(),
            submitter,
        }
    }

    /// The run's globally unique identifier.
    pub fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// Number of steps captured so far.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Execute a unit of work and record it as one step.
    ///
    /// Awaits `work`, applies `explain` to the result, and appends a step
    /// whose output is the explanation's snapshot, falling back to the
    /// serialized work result. Returns the work result to the caller.
    ///
    /// Failure policy: if `work` or `explain` returns an error, no step is
    /// appended and the error propagates unchanged; the recorder stays open
    /// with its step count untouched. The step log is only mutated here,
    /// synchronously, after both have succeeded.
    pub async fn capture_step<T, E, Fut, X>(
        &mut self,
        name: impl Into<String>,
        input: Value,
        work: Fut,
        explain: X,
    ) -> Result<T, E>
    where
        T: Serialize,
        Fut: Future<Output = Result<T, E>>,
        X: FnOnce(&T) -> Result<Explanation, E>,
    {
        let result = work.await?;
        let explanation = explain(&result)?;

        let output = match explanation.output {
            Some(snapshot) => snapshot,
            None => serde_json::to_value(&result).unwrap_or(Value::Null),
        };

        let mut step = Step::new(name, input, output, explanation.reasoning);
        step.candidates = explanation.candidates;
        self.steps.push(step);

        Ok(result)
    }

    /// Finalize the run and hand the trace to the submitter.
    ///
    /// Computes the run duration, snapshots the environment, freezes the
    /// step log, and submits the trace (single fire-and-forget attempt).
    /// Consumes the recorder; the finalized trace is returned to the caller
    /// for inspection and is immutable from here on.
    pub fn finalize(self, status: TraceStatus) -> Trace {
        let duration_ms = (Utc::now() - self.started_at).num_milliseconds().max(0) as u64;

        let trace = Trace {
            trace_id: self.trace_id,
            timestamp: self.started_at,
            status,
            steps: self.steps,
            meta: TraceMeta {
                duration_ms,
                environment: TraceMeta::capture_environment(),
            },
        };

        self.submitter.submit(&trace);
        trace
    }
}
