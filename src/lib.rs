//! xray - decision trace capture with an append-only ingestion log
//!
//! A pipeline of non-deterministic decision steps uses a [`recorder::TraceRecorder`]
//! to capture, per step, its input, output, a human-readable rationale, and the
//! candidate options considered. The finalized run is handed to a
//! [`submit::Submit`] implementation, which ships it fire-and-forget into the
//! append-only [`store::TraceStore`]. The dashboard consumes the store through
//! the HTTP boundary in [`ingest`].

pub mod cli;
pub mod demo;
pub mod ingest;
pub mod model;
pub mod observability;
pub mod recorder;
pub mod store;
pub mod submit;
