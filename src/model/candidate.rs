//! Candidate option types
//!
//! A candidate is one option evaluated at a decision step, carrying a
//! snapshot of its data at that stage and the verdict the step reached.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verdict reached for a candidate at a decision step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    /// Candidate survived the step.
    Selected,
    /// Candidate was eliminated at the step.
    Rejected,
    /// Candidate has not been decided yet.
    Pending,
}

impl CandidateStatus {
    /// Returns the status string as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Selected => "selected",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One option evaluated at a step.
///
/// Invariant: `reason` is set only when `status != selected`. The
/// constructors enforce this; a candidate is immutable once attached
/// to a [`Step`](super::Step).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Caller-supplied identifier (e.g. a product id).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Snapshot of the candidate's data at this stage.
    pub data: Map<String, Value>,
    /// Verdict at this step.
    pub status: CandidateStatus,
    /// Why the candidate was not selected. Absent for selected candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Candidate {
    /// Create a candidate that survived the step.
    pub fn selected(id: impl Into<String>, name: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            status: CandidateStatus::Selected,
            reason: None,
        }
    }

    /// Create a candidate that was eliminated, with the reason why.
    pub fn rejected(
        id: impl Into<String>,
        name: impl Into<String>,
        data: Map<String, Value>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            status: CandidateStatus::Rejected,
            reason: Some(reason.into()),
        }
    }

    /// Create a candidate that has not been decided yet.
    pub fn pending(id: impl Into<String>, name: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data,
            status: CandidateStatus::Pending,
            reason: None,
        }
    }

    /// Whether this candidate survived the step.
    pub fn is_selected(&self) -> bool {
        self.status == CandidateStatus::Selected
    }
}
