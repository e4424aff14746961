//! Scorable assessment questions.

use super::Stage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single scorable item in the question catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, referenced by responses
    pub id: String,
    /// Question text shown to the respondent
    pub text: String,
    /// Category the answer contributes to
    pub category: String,
    /// Relative weight within its category (> 0)
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Stages this question is asked at
    #[serde(default = "all_stages")]
    pub applicable_stages: BTreeSet<Stage>,
}

const fn default_weight() -> f64 {
    1.0
}

fn all_stages() -> BTreeSet<Stage> {
    Stage::all().iter().copied().collect()
}

impl Question {
    /// Create a question with weight 1 that applies to every stage
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            weight: default_weight(),
            applicable_stages: all_stages(),
        }
    }

    /// Set the weight
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Restrict the question to the given stages
    #[must_use]
    pub fn with_stages(mut self, stages: &[Stage]) -> Self {
        self.applicable_stages = stages.iter().copied().collect();
        self
    }

    /// Whether this question is asked at `stage`
    #[must_use]
    pub fn applies_to(&self, stage: Stage) -> bool {
        self.applicable_stages.contains(&stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_everywhere() {
        let q = Question::new("sec-1", "Do you scan dependencies?", "security");
        assert!(Stage::all().iter().all(|s| q.applies_to(*s)));
        assert_eq!(q.weight, 1.0);
    }

    #[test]
    fn test_with_stages_restricts() {
        let q = Question::new("rel-3", "Do you run chaos drills?", "reliability")
            .with_stages(&[Stage::SeriesA, Stage::SeriesB]);
        assert!(!q.applies_to(Stage::PreSeed));
        assert!(!q.applies_to(Stage::Seed));
        assert!(q.applies_to(Stage::SeriesB));
    }

    #[test]
    fn test_deserialize_defaults() {
        let q: Question = serde_json::from_str(
            r#"{"id": "doc-1", "text": "Is there a README?", "category": "documentation"}"#,
        )
        .unwrap();
        assert_eq!(q.weight, 1.0);
        assert_eq!(q.applicable_stages.len(), 4);
    }
}
