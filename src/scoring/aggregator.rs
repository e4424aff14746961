//! Reduce raw responses into normalized per-category scores.

use super::ScoringWarning;
use crate::catalog::QuestionCatalog;
use crate::model::{MAX_RESPONSE_VALUE, MAX_SCORE, ResponseSet, Stage};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Score of one category for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    /// Sum of `value * weight` over answered questions
    pub raw_total: f64,
    /// Sum of `4 * weight` over answered questions
    pub max_possible: f64,
    /// `100 * raw_total / max_possible`, or 0 without answers
    pub normalized: f64,
    /// Answered applicable questions
    pub answered: usize,
    /// Applicable questions
    pub applicable: usize,
}

impl CategoryScore {
    fn empty(category: &str) -> Self {
        Self {
            category: category.to_string(),
            raw_total: 0.0,
            max_possible: 0.0,
            normalized: 0.0,
            answered: 0,
            applicable: 0,
        }
    }

    /// At least one applicable question in this category was answered
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.max_possible > 0.0
    }

    fn finalize(&mut self) {
        self.normalized = if self.has_data() {
            (MAX_SCORE * self.raw_total / self.max_possible).clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
    }
}

/// Output of [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Scores for every category with applicable questions, in catalog order
    pub scores: IndexMap<String, CategoryScore>,
    /// Answered applicable questions across all categories
    pub answered: usize,
    /// Applicable questions across all categories
    pub applicable: usize,
    /// Responses that were dropped, and degenerate categories
    pub warnings: Vec<ScoringWarning>,
}

/// Aggregate responses into per-category scores for `stage`.
///
/// Unanswered questions count towards neither total; they only lower the
/// completion rate. Responses to unknown questions or with values outside
/// 1-4 are dropped with a warning. Responses to questions that do not apply
/// at `stage` are ignored entirely.
#[must_use]
pub fn aggregate(
    responses: &ResponseSet,
    questions: &QuestionCatalog,
    stage: Stage,
) -> Aggregation {
    let mut warnings = Vec::new();

    for (question_id, response) in responses.iter() {
        let Some(question) = questions.get(question_id) else {
            tracing::warn!("Ignoring response for unknown question '{}'", question_id);
            warnings.push(ScoringWarning::UnknownQuestion {
                question_id: question_id.to_string(),
            });
            continue;
        };
        if !question.applies_to(stage) {
            tracing::debug!(
                "Ignoring response for '{}': not asked at {}",
                question_id,
                stage
            );
            continue;
        }
        if !response.is_valid() {
            tracing::warn!(
                "Ignoring out-of-range response {} for '{}'",
                response.value,
                question_id
            );
            warnings.push(ScoringWarning::ValueOutOfRange {
                question_id: question_id.to_string(),
                value: response.value,
            });
        }
    }

    let mut scores: IndexMap<String, CategoryScore> = IndexMap::new();
    let mut answered = 0;
    let mut applicable = 0;

    for question in questions.applicable(stage) {
        let bucket = scores
            .entry(question.category.clone())
            .or_insert_with(|| CategoryScore::empty(&question.category));
        bucket.applicable += 1;
        applicable += 1;

        let Some(response) = responses.get(&question.id).filter(|r| r.is_valid()) else {
            continue;
        };
        bucket.raw_total += response.value as f64 * question.weight;
        bucket.max_possible += MAX_RESPONSE_VALUE as f64 * question.weight;
        bucket.answered += 1;
        answered += 1;
    }

    for score in scores.values_mut() {
        score.finalize();
        if !score.has_data() {
            warnings.push(ScoringWarning::UnansweredCategory {
                category: score.category.clone(),
            });
        }
    }

    if applicable == 0 {
        tracing::warn!("No questions apply at stage {}", stage);
        warnings.push(ScoringWarning::NoApplicableQuestions { stage });
    }

    Aggregation {
        scores,
        answered,
        applicable,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn catalog(questions: Vec<Question>) -> QuestionCatalog {
        QuestionCatalog::new(questions).unwrap()
    }

    #[test]
    fn test_single_max_answer_normalizes_to_100() {
        let questions = catalog(vec![Question::new("s1", "S1", "security")]);
        let responses = ResponseSet::new().with("s1", 4);
        let agg = aggregate(&responses, &questions, Stage::Seed);

        let security = &agg.scores["security"];
        assert_eq!(security.normalized, 100.0);
        assert_eq!(security.raw_total, 4.0);
        assert_eq!(security.max_possible, 4.0);
        assert!(agg.warnings.is_empty());
    }

    #[test]
    fn test_single_min_answer_normalizes_to_25() {
        let questions = catalog(vec![Question::new("s1", "S1", "security")]);
        let responses = ResponseSet::new().with("s1", 1);
        let agg = aggregate(&responses, &questions, Stage::Seed);
        assert_eq!(agg.scores["security"].normalized, 25.0);
    }

    #[test]
    fn test_weights_apply_within_category() {
        let questions = catalog(vec![
            Question::new("s1", "S1", "security").with_weight(3.0),
            Question::new("s2", "S2", "security"),
        ]);
        let responses = ResponseSet::new().with("s1", 4).with("s2", 1);
        let agg = aggregate(&responses, &questions, Stage::Seed);

        let security = &agg.scores["security"];
        assert_eq!(security.raw_total, 13.0);
        assert_eq!(security.max_possible, 16.0);
        assert_eq!(security.normalized, 81.25);
    }

    #[test]
    fn test_unanswered_questions_do_not_penalize() {
        let questions = catalog(vec![
            Question::new("s1", "S1", "security"),
            Question::new("s2", "S2", "security"),
        ]);
        let responses = ResponseSet::new().with("s1", 4);
        let agg = aggregate(&responses, &questions, Stage::Seed);

        assert_eq!(agg.scores["security"].normalized, 100.0);
        assert_eq!(agg.scores["security"].answered, 1);
        assert_eq!(agg.scores["security"].applicable, 2);
        assert_eq!((agg.answered, agg.applicable), (1, 2));
    }

    #[test]
    fn test_unknown_and_out_of_range_are_dropped() {
        let questions = catalog(vec![Question::new("s1", "S1", "security")]);
        let responses = ResponseSet::new().with("ghost", 4).with("s1", 7);
        let agg = aggregate(&responses, &questions, Stage::Seed);

        assert_eq!(agg.scores["security"].normalized, 0.0);
        assert_eq!(agg.answered, 0);
        assert_eq!(
            agg.warnings,
            vec![
                ScoringWarning::UnknownQuestion {
                    question_id: "ghost".to_string()
                },
                ScoringWarning::ValueOutOfRange {
                    question_id: "s1".to_string(),
                    value: 7
                },
                ScoringWarning::UnansweredCategory {
                    category: "security".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_non_applicable_question_is_excluded() {
        let questions = catalog(vec![
            Question::new("s1", "S1", "security"),
            Question::new("s2", "S2", "security").with_stages(&[Stage::SeriesA]),
        ]);
        let responses = ResponseSet::new().with("s1", 4).with("s2", 1);
        let agg = aggregate(&responses, &questions, Stage::PreSeed);

        assert_eq!(agg.scores["security"].normalized, 100.0);
        assert_eq!((agg.answered, agg.applicable), (1, 1));
        assert!(agg.warnings.is_empty());
    }

    #[test]
    fn test_categories_follow_catalog_order() {
        let questions = catalog(vec![
            Question::new("v1", "V1", "velocity"),
            Question::new("s1", "S1", "security"),
            Question::new("v2", "V2", "velocity"),
        ]);
        let agg = aggregate(&ResponseSet::new(), &questions, Stage::Seed);
        let order: Vec<&str> = agg.scores.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["velocity", "security"]);
    }

    #[test]
    fn test_no_applicable_questions_warns() {
        let questions = catalog(vec![
            Question::new("s1", "S1", "security").with_stages(&[Stage::SeriesB]),
        ]);
        let agg = aggregate(&ResponseSet::new(), &questions, Stage::Seed);
        assert!(agg.scores.is_empty());
        assert_eq!(
            agg.warnings,
            vec![ScoringWarning::NoApplicableQuestions { stage: Stage::Seed }]
        );
    }
}
