//! # Response Formatting
//!
//! Standard response types for the ingestion boundary.

use serde::Serialize;
use uuid::Uuid;

/// Response to a successful trace append.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub success: bool,
    pub id: Uuid,
}

impl IngestResponse {
    pub fn accepted(id: Uuid) -> Self {
        Self { success: true, id }
    }
}

/// Response to a truncate.
#[derive(Debug, Clone, Serialize)]
pub struct TruncateResponse {
    pub success: bool,
}

impl TruncateResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_response_serialization() {
        let id = Uuid::new_v4();
        let response = IngestResponse::accepted(id);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], id.to_string());
    }

    #[test]
    fn test_truncate_response_serialization() {
        let json = serde_json::to_value(TruncateResponse::success()).unwrap();
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_health_response() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
