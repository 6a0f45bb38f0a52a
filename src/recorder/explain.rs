//! Step Explainer contract
//!
//! An explainer is a pure function from a work result to an [`Explanation`]:
//! no I/O, no mutable external state beyond the closure of the step being
//! explained. Purity is what makes the recorder's capture semantics sound -
//! an explain failure is indistinguishable from a work failure, and neither
//! leaves a partial step behind.

use serde_json::Value;

use crate::model::Candidate;

/// What an explainer derives from a work result.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    /// Human-readable summary of what the step decided and why.
    pub reasoning: String,
    /// The options evaluated at the step, if the step weighed any.
    pub candidates: Option<Vec<Candidate>>,
    /// Output snapshot to record in place of the raw work result.
    pub output: Option<Value>,
}

impl Explanation {
    /// Create an explanation with just reasoning.
    pub fn new(reasoning: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            candidates: None,
            output: None,
        }
    }

    /// Attach the candidate report.
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Record this snapshot as the step output instead of the raw result.
    pub fn with_output(mut self, output: Value) -> Self {
        self.output = Some(output);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let explanation = Explanation::new("filtered down to 2 items")
            .with_candidates(vec![Candidate::selected("p1", "A", Default::default())])
            .with_output(json!({"survivors": ["A"]}));

        assert_eq!(explanation.reasoning, "filtered down to 2 items");
        assert_eq!(explanation.candidates.as_ref().unwrap().len(), 1);
        assert_eq!(explanation.output.unwrap()["survivors"][0], "A");
    }

    #[test]
    fn test_minimal_explanation() {
        let explanation = Explanation::new("found 4 items");
        assert!(explanation.candidates.is_none());
        assert!(explanation.output.is_none());
    }
}
