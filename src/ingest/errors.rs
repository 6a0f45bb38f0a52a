//! # Ingestion API Errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for ingestion handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Ingestion boundary errors.
///
/// Only the write paths can fail: reads degrade to an empty result inside
/// the store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store rejected an append; the producer must learn a write was lost.
    #[error("Failed to save trace")]
    AppendFailed(#[source] StoreError),

    /// The store could not be truncated.
    #[error("Failed to clear traces")]
    TruncateFailed(#[source] StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AppendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::TruncateFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
