//! Category aggregation and overall score combination.
//!
//! Scoring is a pure function of the response set, the question catalog
//! and the stage. Nothing here fails: malformed responses are dropped and
//! reported as [`ScoringWarning`] values, and degenerate inputs (no
//! responses, no applicable questions) score 0 instead of NaN.

mod aggregator;
mod combiner;

pub use aggregator::{Aggregation, CategoryScore, aggregate};
pub use combiner::{MaturityLevel, OverallScore, combine};

use crate::model::Stage;
use serde::{Deserialize, Serialize};

/// Fraction of applicable questions that have a valid response.
///
/// Defined as 0 when nothing is applicable.
#[must_use]
pub fn completion_rate(answered: usize, applicable: usize) -> f64 {
    if applicable == 0 {
        0.0
    } else {
        (answered as f64 / applicable as f64).clamp(0.0, 1.0)
    }
}

/// A non-fatal problem found while scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringWarning {
    /// Response references a question that is not in the catalog
    UnknownQuestion { question_id: String },
    /// Response value is outside 1-4
    ValueOutOfRange { question_id: String, value: i64 },
    /// Category has applicable questions but none answered
    UnansweredCategory { category: String },
    /// The catalog has no questions for the stage
    NoApplicableQuestions { stage: Stage },
}

impl std::fmt::Display for ScoringWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownQuestion { question_id } => {
                write!(f, "response for unknown question '{question_id}' ignored")
            }
            Self::ValueOutOfRange { question_id, value } => {
                write!(
                    f,
                    "response {value} for '{question_id}' is outside 1-4 and was ignored"
                )
            }
            Self::UnansweredCategory { category } => {
                write!(f, "no answered questions in category '{category}'")
            }
            Self::NoApplicableQuestions { stage } => {
                write!(f, "no questions apply at stage {stage}")
            }
        }
    }
}
