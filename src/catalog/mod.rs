//! Static, read-only registries the engine scores against.
//!
//! - [`QuestionCatalog`]: the scorable items
//! - [`RecommendationCatalog`]: candidate improvement actions
//! - [`BenchmarkTable`]: expected scores and category importance per stage
//!
//! Each registry validates its entries on construction. A malformed entry
//! is a configuration error and aborts initialization; nothing is
//! validated again during scoring.

mod benchmarks;
mod builtin;
pub mod loader;

pub use benchmarks::{BenchmarkTable, StageBenchmark};
pub use loader::{load_benchmark_table, load_question_catalog, load_recommendation_catalog};

use crate::error::{ConfigurationErrorKind, OctoflowError, Result};
use crate::model::{MAX_WEIGHT, Question, Recommendation, Stage};
use indexmap::{IndexMap, IndexSet};

// ============================================================================
// Question catalog
// ============================================================================

/// Registry of questions, keyed by id in insertion order
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: IndexMap<String, Question>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting empty input and malformed entries
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(OctoflowError::configuration(
                "question catalog",
                ConfigurationErrorKind::EmptyCatalog("question"),
            ));
        }

        let mut by_id = IndexMap::with_capacity(questions.len());
        for question in questions {
            validate_question(&question)?;
            if by_id.contains_key(&question.id) {
                return Err(OctoflowError::configuration(
                    "question catalog",
                    ConfigurationErrorKind::DuplicateId {
                        kind: "question",
                        id: question.id,
                    },
                ));
            }
            by_id.insert(question.id.clone(), question);
        }

        Ok(Self { questions: by_id })
    }

    /// The built-in engineering-practice questionnaire
    ///
    /// Skips [`QuestionCatalog::new`]; `test_builtin_catalogs_pass_validation`
    /// runs the built-in entries through it instead.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions()
                .into_iter()
                .map(|q| (q.id.clone(), q))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    /// Questions asked at `stage`, in catalog order
    pub fn applicable(&self, stage: Stage) -> impl Iterator<Item = &Question> {
        self.questions.values().filter(move |q| q.applies_to(stage))
    }

    /// Distinct categories in first-seen order
    #[must_use]
    pub fn categories(&self) -> IndexSet<&str> {
        self.questions
            .values()
            .map(|q| q.category.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(question: &Question) -> Result<()> {
    let context = || format!("question '{}'", question.id);

    if question.category.trim().is_empty() {
        return Err(OctoflowError::configuration(
            context(),
            ConfigurationErrorKind::EmptyCategory {
                id: question.id.clone(),
            },
        ));
    }
    if !question.weight.is_finite() || question.weight <= 0.0 || question.weight > MAX_WEIGHT {
        return Err(OctoflowError::configuration(
            context(),
            ConfigurationErrorKind::InvalidWeight {
                id: question.id.clone(),
                weight: question.weight,
                max: MAX_WEIGHT,
            },
        ));
    }
    if question.applicable_stages.is_empty() {
        return Err(OctoflowError::configuration(
            context(),
            ConfigurationErrorKind::NoApplicableStages {
                id: question.id.clone(),
            },
        ));
    }
    Ok(())
}

// ============================================================================
// Recommendation catalog
// ============================================================================

/// Registry of recommendations in insertion order.
///
/// Insertion order is the tie-breaker when two recommendations end up with
/// the same priority.
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    entries: Vec<Recommendation>,
}

impl RecommendationCatalog {
    /// Build a catalog, rejecting empty input and malformed entries
    pub fn new(entries: Vec<Recommendation>) -> Result<Self> {
        if entries.is_empty() {
            return Err(OctoflowError::configuration(
                "recommendation catalog",
                ConfigurationErrorKind::EmptyCatalog("recommendation"),
            ));
        }

        let mut seen = IndexSet::with_capacity(entries.len());
        for rec in &entries {
            validate_recommendation(rec)?;
            if !seen.insert(rec.id.as_str()) {
                return Err(OctoflowError::configuration(
                    "recommendation catalog",
                    ConfigurationErrorKind::DuplicateId {
                        kind: "recommendation",
                        id: rec.id.clone(),
                    },
                ));
            }
        }

        Ok(Self { entries })
    }

    /// The built-in recommendation catalog
    ///
    /// Skips [`RecommendationCatalog::new`]; `test_builtin_catalogs_pass_validation`
    /// covers the entries, including id uniqueness.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin::recommendations(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recommendation> {
        self.entries.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[Recommendation] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_recommendation(rec: &Recommendation) -> Result<()> {
    let context = || format!("recommendation '{}'", rec.id);

    if rec.category.trim().is_empty() {
        return Err(OctoflowError::configuration(
            context(),
            ConfigurationErrorKind::EmptyCategory { id: rec.id.clone() },
        ));
    }
    if let Some(range) = rec.applicable_score_range
        && !range.is_valid()
    {
        return Err(OctoflowError::configuration(
            context(),
            ConfigurationErrorKind::InvalidScoreRange {
                id: rec.id.clone(),
                min: range.min,
                max: range.max,
            },
        ));
    }
    Ok(())
}
