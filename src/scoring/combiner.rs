//! Combine category scores into one overall score and maturity level.

use super::CategoryScore;
use crate::catalog::StageBenchmark;
use crate::model::MAX_SCORE;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Qualitative maturity derived from the overall score
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MaturityLevel {
    /// Below 50
    Initial,
    /// 50-69
    Basic,
    /// 70-89
    Proactive,
    /// 90-100
    Advanced,
}

impl MaturityLevel {
    /// Classify a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Advanced
        } else if score >= 70.0 {
            Self::Proactive
        } else if score >= 50.0 {
            Self::Basic
        } else {
            Self::Initial
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Basic => "Basic",
            Self::Proactive => "Proactive",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Practices are ad hoc and mostly manual",
            Self::Basic => "Core practices exist but are applied inconsistently",
            Self::Proactive => "Practices are automated and routinely followed",
            Self::Advanced => "Practices are measured and continuously improved",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall score and its level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: f64,
    pub level: MaturityLevel,
}

/// Weighted mean of normalized category scores.
///
/// Each category is weighted by its importance in `benchmark` (1 when not
/// configured). Categories without answered questions are left out, and
/// the score is 0 when no category has data.
#[must_use]
pub fn combine(scores: &IndexMap<String, CategoryScore>, benchmark: &StageBenchmark) -> OverallScore {
    let (weighted_sum, total_weight) = scores
        .values()
        .filter(|s| s.has_data())
        .fold((0.0, 0.0), |(sum, total), s| {
            let importance = benchmark.importance(&s.category);
            (sum + s.normalized * importance, total + importance)
        });

    let score = if total_weight > 0.0 {
        (weighted_sum / total_weight).clamp(0.0, MAX_SCORE)
    } else {
        0.0
    };

    OverallScore {
        score,
        level: MaturityLevel::from_score(score),
    }
}
