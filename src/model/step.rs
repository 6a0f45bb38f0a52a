//! Recorded step types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Candidate;

/// One recorded unit of work within a trace.
///
/// Steps are created exactly once per successful unit of work and never
/// mutated afterwards. Within a trace they are totally ordered by append
/// position; sequence, not timestamp, is authoritative when they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique step identifier.
    pub id: Uuid,
    /// Step name as supplied by the pipeline (e.g. "2. Apply Filters").
    pub name: String,
    /// When the step completed, epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the step's input.
    pub input: Value,
    /// Snapshot of the step's output.
    pub output: Value,
    /// Human-readable summary of what the step decided and why.
    pub reasoning: String,
    /// The options evaluated at this step, if the explainer reported any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Open extension map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Step {
    /// Create a step with a fresh id, timestamped now.
    pub fn new(
        name: impl Into<String>,
        input: Value,
        output: Value,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            timestamp: super::now_millis(),
            input,
            output,
            reasoning: reasoning.into(),
            candidates: None,
            metadata: None,
        }
    }

    /// Attach the evaluated candidates.
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Attach extension metadata.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CandidateStatus;
    use serde_json::json;

    #[test]
    fn test_new_step_has_unique_id() {
        let a = Step::new("search", json!({}), json!({}), "found items");
        let b = Step::new("search", json!({}), json!({}), "found items");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_timestamp_serializes_as_millis() {
        let step = Step::new("search", json!({"q": "bottle"}), json!({"count": 4}), "ok");
        let json = serde_json::to_value(&step).unwrap();
        assert!(json["timestamp"].is_i64(), "timestamp must be epoch millis");
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let step = Step::new("search", json!({}), json!({}), "ok");
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("candidates").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_roundtrip_with_candidates() {
        let candidates = vec![
            Candidate::selected("p1", "A", Map::new()),
            Candidate::rejected("p2", "B", Map::new(), "too expensive"),
        ];
        let step = Step::new("filter", json!({"rule": "price"}), json!({"kept": 1}), "filtered")
            .with_candidates(candidates);

        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();

        assert_eq!(step, back);
        let restored = back.candidates.unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].status, CandidateStatus::Selected);
    }
}
