//! Diagnostics for the trace-capture core
//!
//! Telemetry about telemetry: the recorder, submitter, and store report
//! their own failures here, never to the pipeline they observe.

mod logger;

pub use logger::{Diag, Severity};
