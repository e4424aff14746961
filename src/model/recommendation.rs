//! Improvement recommendations.

use super::{MAX_SCORE, Stage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Expected impact of acting on a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Priority contribution: high 3, medium 2, low 1
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Expected effort to implement a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    High,
    Medium,
    Low,
}

impl Effort {
    /// Priority contribution, inverted: low 3, medium 2, high 1
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::Low => 3,
            Self::Medium => 2,
            Self::High => 1,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Closed score interval `[min, max]` on the 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    /// Ordered and within 0-100
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.max <= MAX_SCORE
            && self.min <= self.max
    }
}

/// A static catalog entry describing one improvement action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    /// Concrete steps, in order
    #[serde(default)]
    pub action_items: Vec<String>,
    /// When set, the entry is selected by score range instead of benchmark gap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_score_range: Option<ScoreRange>,
    /// When set, the entry only applies at this stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    /// Whether the action can be automated (bots, CI templates, settings)
    #[serde(default)]
    pub automatable: bool,
}

impl Recommendation {
    /// Create a gap-based recommendation with no action items
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        impact: Impact,
        effort: Effort,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            description: String::new(),
            impact,
            effort,
            action_items: Vec::new(),
            applicable_score_range: None,
            stage: None,
            automatable: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_actions(mut self, items: &[&str]) -> Self {
        self.action_items = items.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.applicable_score_range = Some(ScoreRange::new(min, max));
        self
    }

    #[must_use]
    pub const fn for_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    #[must_use]
    pub const fn automatable(mut self) -> Self {
        self.automatable = true;
        self
    }

    /// High impact and low effort
    #[must_use]
    pub fn is_quick_win(&self) -> bool {
        self.impact == Impact::High && self.effort == Effort::Low
    }

    /// Base priority before context adjustments (1-9)
    #[must_use]
    pub fn base_priority(&self) -> f64 {
        f64::from(self.impact.score() * self.effort.score())
    }

    /// Whether the stage restriction (if any) admits `stage`
    #[must_use]
    pub fn applies_at(&self, stage: Stage) -> bool {
        self.stage.is_none_or(|s| s == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effort_score_is_inverted() {
        assert!(Effort::Low.score() > Effort::Medium.score());
        assert!(Effort::Medium.score() > Effort::High.score());
        assert!(Impact::High.score() > Impact::Low.score());
    }

    #[test]
    fn test_base_priority_extremes() {
        let best = Recommendation::new("a", "security", "A", Impact::High, Effort::Low);
        let worst = Recommendation::new("b", "security", "B", Impact::Low, Effort::High);
        assert_eq!(best.base_priority(), 9.0);
        assert_eq!(worst.base_priority(), 1.0);
        assert!(best.is_quick_win());
        assert!(!worst.is_quick_win());
    }

    #[test]
    fn test_score_range_is_closed() {
        let range = ScoreRange::new(0.0, 40.0);
        assert!(range.contains(0.0));
        assert!(range.contains(40.0));
        assert!(!range.contains(40.1));
        assert!(!ScoreRange::new(50.0, 10.0).is_valid());
        assert!(!ScoreRange::new(-1.0, 10.0).is_valid());
        assert!(!ScoreRange::new(0.0, 101.0).is_valid());
    }

    #[test]
    fn test_stage_restriction() {
        let rec = Recommendation::new("x", "velocity", "X", Impact::Medium, Effort::Medium)
            .for_stage(Stage::Seed);
        assert!(rec.applies_at(Stage::Seed));
        assert!(!rec.applies_at(Stage::SeriesA));
    }

    #[test]
    fn test_deserialize_lowercase_levels() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"id": "sec-mfa", "category": "security", "title": "Enforce MFA",
                "description": "", "impact": "high", "effort": "low",
                "applicable_score_range": {"min": 0, "max": 50}}"#,
        )
        .unwrap();
        assert!(rec.is_quick_win());
        assert_eq!(rec.applicable_score_range, Some(ScoreRange::new(0.0, 50.0)));
        assert!(!rec.automatable);
    }
}
