//! Candidate selection from score gaps and score ranges.

use crate::catalog::{RecommendationCatalog, StageBenchmark};
use crate::model::{Recommendation, Stage};
use crate::scoring::CategoryScore;
use indexmap::IndexMap;

/// Select catalog entries that apply to the current scores.
///
/// An entry with an `applicable_score_range` is range-based and is selected
/// when the range contains its category's normalized score. An entry
/// without one is gap-based and is selected when the category scores
/// strictly below its benchmark. Entries restricted to a stage only apply at
/// that stage, and categories without answered questions never select
/// anything.
///
/// The result keeps catalog order. Catalog ids are unique, so each id is
/// selected at most once.
#[must_use]
pub fn generate(
    scores: &IndexMap<String, CategoryScore>,
    benchmark: &StageBenchmark,
    catalog: &RecommendationCatalog,
    stage: Stage,
) -> Vec<Recommendation> {
    let mut selected = Vec::new();

    for rec in catalog.entries() {
        if !rec.applies_at(stage) {
            continue;
        }
        let Some(score) = scores.get(&rec.category).filter(|s| s.has_data()) else {
            continue;
        };

        let matched = match rec.applicable_score_range {
            Some(range) => range.contains(score.normalized),
            None => benchmark
                .expected(&rec.category)
                .is_some_and(|expected| score.normalized < expected),
        };

        if matched {
            selected.push(rec.clone());
        }
    }

    tracing::debug!(
        "Selected {} of {} recommendations for {}",
        selected.len(),
        catalog.len(),
        stage
    );
    selected
}
