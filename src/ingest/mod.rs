//! # HTTP Ingestion Boundary
//!
//! Axum server exposing the log store to the submitter and the dashboard:
//!
//! - `POST /ingest` - append a trace
//! - `GET /ingest` - up to 50 most recent traces, newest first
//! - `DELETE /ingest` - truncate the store
//! - `GET /health` - liveness probe
//!
//! No authentication: the boundary is a local monitoring sink.

mod config;
mod errors;
mod response;
mod server;

pub use config::IngestConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{HealthResponse, IngestResponse, TruncateResponse};
pub use server::IngestServer;
