use std::fmt;

use serde::Serialize;

use crate::extraction::ExtractionOutcome;
use crate::screening::scorer::format_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Shortlisted,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Shortlisted => f.write_str("Shortlisted"),
            Status::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Whether the resume text could be read. A `Rejected` candidate with
/// `Failed` here was never actually evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExtractionStatus {
    Extracted,
    Unsupported,
    Failed { reason: String },
}

impl From<&ExtractionOutcome> for ExtractionStatus {
    fn from(outcome: &ExtractionOutcome) -> Self {
        match outcome {
            ExtractionOutcome::Extracted(_) => ExtractionStatus::Extracted,
            ExtractionOutcome::Unsupported => ExtractionStatus::Unsupported,
            ExtractionOutcome::Failed { reason } => ExtractionStatus::Failed {
                reason: reason.clone(),
            },
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateResult {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub score: f64,
    pub status: Status,
    pub extraction: ExtractionStatus,
}

impl CandidateResult {
    pub fn skills_display(&self) -> String {
        if self.skills.is_empty() {
            "None Found".to_string()
        } else {
            self.skills.join(", ")
        }
    }

    pub fn score_display(&self) -> String {
        format_score(self.score)
    }

    pub fn is_shortlisted(&self) -> bool {
        self.status == Status::Shortlisted
    }

    /// Short explanation shown next to candidates whose file was not evaluated.
    pub fn note(&self) -> Option<String> {
        match &self.extraction {
            ExtractionStatus::Extracted => None,
            ExtractionStatus::Unsupported => Some("Unsupported file type".to_string()),
            ExtractionStatus::Failed { reason } => Some(format!("Could not read file: {reason}")),
        }
    }
}
