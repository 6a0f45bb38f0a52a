//! Trace types
//!
//! A trace is the complete record of one pipeline run. It is owned
//! exclusively by the recorder until finalize, then handed by value to the
//! submitter and store; no party mutates it afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Step;

/// Environment variable consulted for `meta.environment` snapshots.
pub(crate) const ENVIRONMENT_VAR: &str = "XRAY_ENV";

/// Terminal status of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    /// The run completed normally.
    Success,
    /// The run ended with a pipeline-domain error.
    Failure,
}

impl TraceStatus {
    /// Returns the status string as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceStatus::Success => "success",
            TraceStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for TraceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run-level metadata, set exactly once at finalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceMeta {
    /// Wall-clock duration of the run in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Environment the run executed in (e.g. "development", "production").
    pub environment: String,
}

impl TraceMeta {
    /// Snapshot the current process environment name.
    ///
    /// Reads `XRAY_ENV`, defaulting to "development".
    pub fn capture_environment() -> String {
        std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string())
    }
}

/// The complete, immutable record of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Globally unique run identifier.
    pub trace_id: Uuid,
    /// Run start time, epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Terminal status of the run.
    pub status: TraceStatus,
    /// Ordered step log, frozen at finalize.
    pub steps: Vec<Step>,
    /// Run-level metadata.
    pub meta: TraceMeta,
}

impl Trace {
    /// Number of recorded steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_trace() -> Trace {
        Trace {
            trace_id: Uuid::new_v4(),
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            status: TraceStatus::Success,
            steps: vec![Step::new("search", json!({"q": "bottle"}), json!({"count": 4}), "found 4")],
            meta: TraceMeta {
                duration_ms: 512,
                environment: "development".to_string(),
            },
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let trace = sample_trace();
        let json = serde_json::to_value(&trace).unwrap();
        assert!(json.get("traceId").is_some());
        assert!(json.get("trace_id").is_none());
        assert_eq!(json["meta"]["duration"], 512);
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn test_roundtrip() {
        let trace = sample_trace();
        let json = serde_json::to_string(&trace).unwrap();
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, back);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TraceStatus::Success.to_string(), "success");
        assert_eq!(TraceStatus::Failure.to_string(), "failure");
    }

    #[test]
    fn test_environment_defaults_to_development() {
        // XRAY_ENV is not set under cargo test
        if std::env::var(ENVIRONMENT_VAR).is_err() {
            assert_eq!(TraceMeta::capture_environment(), "development");
        }
    }
}
