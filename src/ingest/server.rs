//! # Ingestion HTTP Server
//!
//! Axum-based server for the ingestion boundary. Handlers hold the store as
//! an injected `Arc<dyn TraceStore>`; swapping the file store for the
//! in-memory one is a one-line change in tests.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::model::Trace;
use crate::observability::Diag;
use crate::store::{TraceStore, DEFAULT_READ_LIMIT};

use super::config::IngestConfig;
use super::errors::{ApiError, ApiResult};
use super::response::{HealthResponse, IngestResponse, TruncateResponse};

/// Shared state type.
type StoreState = Arc<dyn TraceStore>;

/// Ingestion server for the trace log store.
pub struct IngestServer {
    config: IngestConfig,
    router: Router,
}

impl IngestServer {
    /// Create a server over the given store with default configuration.
    pub fn new(store: Arc<dyn TraceStore>) -> Self {
        Self::with_config(store, IngestConfig::default())
    }

    /// Create a server over the given store with custom configuration.
    pub fn with_config(store: Arc<dyn TraceStore>, config: IngestConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with all ingestion endpoints.
    fn build_router(store: StoreState, config: &IngestConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/ingest",
                get(list_handler)
                    .post(ingest_handler)
                    .delete(truncate_handler),
            )
            .with_state(store)
            .layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Start serving (async).
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        Diag::info("SERVER_STARTED", &[("addr", addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Append a trace to the store.
async fn ingest_handler(
    State(store): State<StoreState>,
    Json(trace): Json<Trace>,
) -> ApiResult<(StatusCode, Json<IngestResponse>)> {
    let id = trace.trace_id;

    store.append(&trace).map_err(|e| {
        Diag::error(
            "APPEND_FAILED",
            &[("trace_id", id.to_string()), ("error", e.to_string())],
        );
        ApiError::AppendFailed(e)
    })?;

    Diag::info("TRACE_APPENDED", &[("trace_id", id.to_string())]);
    Ok((StatusCode::CREATED, Json(IngestResponse::accepted(id))))
}

/// List the most recent traces, newest first.
async fn list_handler(State(store): State<StoreState>) -> Json<Vec<Trace>> {
    Json(store.read_recent(DEFAULT_READ_LIMIT))
}

/// Truncate the store.
async fn truncate_handler(
    State(store): State<StoreState>,
) -> ApiResult<Json<TruncateResponse>> {
    store.truncate().map_err(ApiError::TruncateFailed)?;
    Ok(Json(TruncateResponse::success()))
}

/// Liveness probe.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTraceStore;

    #[test]
    fn test_server_creation() {
        let store: StoreState = Arc::new(MemoryTraceStore::new());
        let server = IngestServer::new(store);
        let _router = server.router();
    }

    #[test]
    fn test_custom_port_reflected_in_addr() {
        let store: StoreState = Arc::new(MemoryTraceStore::new());
        let server = IngestServer::with_config(store, IngestConfig::with_port(9999));
        assert_eq!(server.socket_addr(), "0.0.0.0:9999");
    }
}
