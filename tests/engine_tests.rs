//! End-to-end engine tests.
//!
//! Small hand-built catalogs make each expected number easy to verify by
//! hand; the built-in catalogs are exercised at the end.

use octoflow::catalog::{BenchmarkTable, QuestionCatalog, RecommendationCatalog, StageBenchmark};
use octoflow::model::{
    Effort, Impact, MAX_SCORE, MAX_WEIGHT, Question, Recommendation, RecommendationContext,
    ResponseSet, Stage,
};
use octoflow::recommend::{Prioritizer, quick_wins};
use octoflow::scoring::{MaturityLevel, ScoringWarning};
use octoflow::{AssessmentEngine, OctoflowError};

// ============================================================================
// Helpers
// ============================================================================

fn security_engine() -> AssessmentEngine {
    let questions = QuestionCatalog::new(vec![
        Question::new("sec-1", "Is branch protection on?", "security"),
        Question::new("sec-growth", "Is there a security team?", "security")
            .with_stages(&[Stage::Seed, Stage::SeriesA, Stage::SeriesB]),
    ])
    .unwrap();
    let recommendations = RecommendationCatalog::new(vec![
        Recommendation::new(
            "sec-protect",
            "security",
            "Protect main",
            Impact::High,
            Effort::Low,
        ),
        Recommendation::new(
            "sec-basics-template",
            "security",
            "Security basics",
            Impact::Medium,
            Effort::Medium,
        )
        .with_range(0.0, 30.0),
    ])
    .unwrap();
    let benchmarks = BenchmarkTable::new(vec![
        StageBenchmark::new(Stage::PreSeed).with_category("security", 50.0, 1.0),
        StageBenchmark::new(Stage::Seed).with_category("security", 70.0, 1.0),
    ])
    .unwrap();
    AssessmentEngine::new(questions, recommendations, benchmarks)
}

fn ids(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Example scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn full_marks_meet_benchmark_without_recommendations() {
        let responses = ResponseSet::new().with("sec-1", 4).with("sec-growth", 4);
        let result = security_engine()
            .evaluate(&responses, Stage::Seed, None)
            .unwrap();

        assert_eq!(result.category_scores["security"].normalized, 100.0);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.level, MaturityLevel::Advanced);
    }

    #[test]
    fn lowest_answer_selects_gap_and_range_recommendations() {
        let responses = ResponseSet::new().with("sec-1", 1).with("sec-growth", 1);
        let result = security_engine()
            .evaluate(&responses, Stage::Seed, None)
            .unwrap();

        assert_eq!(result.category_scores["security"].normalized, 25.0);
        assert_eq!(ids(&result.recommendations), vec!["sec-protect", "sec-basics-template"]);
        assert_eq!(result.level, MaturityLevel::Initial);
        assert_eq!(result.weaknesses[0].gap, Some(25.0 - 70.0));
    }

    #[test]
    fn no_responses_score_zero() {
        let result = security_engine()
            .evaluate(&ResponseSet::new(), Stage::Seed, None)
            .unwrap();

        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.completion_rate, 0.0);
        assert!(result.recommendations.is_empty());
        assert!(result.quick_wins.is_empty());
        assert_eq!(
            result.warnings,
            vec![ScoringWarning::UnansweredCategory {
                category: "security".to_string()
            }]
        );
    }

    #[test]
    fn low_effort_ranks_before_high_effort_at_equal_impact() {
        let r1 = Recommendation::new("r1", "security", "R1", Impact::High, Effort::Low);
        let r2 = Recommendation::new("r2", "security", "R2", Impact::High, Effort::High);

        let ordered = Prioritizer::default().prioritize(vec![r2, r1], None);
        assert_eq!(ids(&ordered), vec!["r1", "r2"]);

        let wins = quick_wins(&ordered);
        assert_eq!(ids(&wins), vec!["r1"]);
    }

    #[test]
    fn responses_to_questions_not_asked_at_stage_are_ignored() {
        let responses = ResponseSet::new().with("sec-1", 4).with("sec-growth", 1);
        let result = security_engine()
            .evaluate(&responses, Stage::PreSeed, None)
            .unwrap();

        let security = &result.category_scores["security"];
        assert_eq!(security.normalized, 100.0);
        assert_eq!(security.applicable, 1);
        assert_eq!(result.answered_questions, 1);
        assert_eq!(result.applicable_questions, 1);
        assert_eq!(result.completion_rate, 1.0);
        assert!(result.warnings.is_empty());
    }
}

// ============================================================================
// Error handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn stage_without_benchmarks_is_configuration_error() {
        let err = security_engine()
            .evaluate(&ResponseSet::new(), Stage::SeriesB, None)
            .unwrap_err();
        assert!(matches!(err, OctoflowError::Configuration { .. }));
        assert!(err.to_string().contains("series-b"));
    }

    #[test]
    fn invalid_responses_are_dropped_not_fatal() {
        let responses = ResponseSet::new()
            .with("sec-1", 0)
            .with("sec-growth", 3)
            .with("gone", 2);
        let result = security_engine()
            .evaluate(&responses, Stage::Seed, None)
            .unwrap();

        assert_eq!(result.category_scores["security"].normalized, 75.0);
        assert_eq!(result.completion_rate, 0.5);
        assert!(result.warnings.contains(&ScoringWarning::ValueOutOfRange {
            question_id: "sec-1".to_string(),
            value: 0
        }));
        assert!(result.warnings.contains(&ScoringWarning::UnknownQuestion {
            question_id: "gone".to_string()
        }));
    }

    #[test]
    fn extreme_weights_rejected_before_scoring() {
        let questions =
            QuestionCatalog::new(vec![Question::new("s1", "S", "security").with_weight(1e308)]);
        assert!(matches!(questions, Err(OctoflowError::Configuration { .. })));

        let benchmarks = BenchmarkTable::new(vec![
            StageBenchmark::new(Stage::Seed)
                .with_category("security", 70.0, 1e308)
                .with_category("velocity", 60.0, 1e308),
        ]);
        assert!(matches!(benchmarks, Err(OctoflowError::Configuration { .. })));
    }

    #[test]
    fn largest_allowed_weights_keep_scores_finite() {
        let questions = QuestionCatalog::new(vec![
            Question::new("s1", "S", "security").with_weight(MAX_WEIGHT),
            Question::new("s2", "S", "security").with_weight(MAX_WEIGHT),
            Question::new("v1", "V", "velocity").with_weight(MAX_WEIGHT),
        ])
        .unwrap();
        let recommendations = RecommendationCatalog::new(vec![Recommendation::new(
            "sec-gap",
            "security",
            "Gap",
            Impact::High,
            Effort::Low,
        )])
        .unwrap();
        let benchmarks = BenchmarkTable::new(vec![
            StageBenchmark::new(Stage::Seed)
                .with_category("security", 70.0, MAX_WEIGHT)
                .with_category("velocity", 60.0, MAX_WEIGHT),
        ])
        .unwrap();
        let engine = AssessmentEngine::new(questions, recommendations, benchmarks);

        let responses = ResponseSet::new().with("s1", 4).with("s2", 4).with("v1", 2);
        let result = engine.evaluate(&responses, Stage::Seed, None).unwrap();

        assert_eq!(result.category_scores["security"].normalized, 100.0);
        assert_eq!(result.category_scores["velocity"].normalized, 50.0);
        assert!(result.overall_score.is_finite());
        assert!((0.0..=MAX_SCORE).contains(&result.overall_score));
        assert!((result.overall_score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_question_ids_rejected() {
        let result = QuestionCatalog::new(vec![
            Question::new("q", "A", "security"),
            Question::new("q", "B", "security"),
        ]);
        assert!(result.is_err());
    }
}

// ============================================================================
// Built-in catalogs
// ============================================================================

mod builtin {
    use super::*;

    fn all_answered(value: i64) -> ResponseSet {
        QuestionCatalog::builtin()
            .iter()
            .map(|q| (q.id.clone(), octoflow::Response::new(value, 0)))
            .collect()
    }

    #[test]
    fn every_stage_evaluates() {
        let engine = AssessmentEngine::builtin();
        for stage in Stage::all() {
            let result = engine.evaluate(&all_answered(3), *stage, None).unwrap();
            assert_eq!(result.completion_rate, 1.0, "{stage}");
            assert!((result.overall_score - 75.0).abs() < 1e-9, "{stage}");
            assert_eq!(result.level, MaturityLevel::Proactive, "{stage}");
        }
    }

    #[test]
    fn stage_templates_only_fire_at_their_stage() {
        let engine = AssessmentEngine::builtin();
        let pre_seed = engine.evaluate(&all_answered(1), Stage::PreSeed, None).unwrap();
        let series_b = engine.evaluate(&all_answered(1), Stage::SeriesB, None).unwrap();

        assert!(ids(&pre_seed.recommendations).contains(&"tpl-pre-seed-security-basics"));
        assert!(!ids(&series_b.recommendations).contains(&"tpl-pre-seed-security-basics"));
        assert!(ids(&series_b.recommendations).contains(&"tpl-series-b-compliance-readiness"));
    }

    #[test]
    fn public_context_lifts_security() {
        let engine = AssessmentEngine::builtin();
        let responses = all_answered(1);
        let context = RecommendationContext::default().public(true);

        let plain = engine.evaluate(&responses, Stage::Seed, None).unwrap();
        let boosted = engine.evaluate(&responses, Stage::Seed, Some(&context)).unwrap();

        assert_eq!(plain.recommendations.len(), boosted.recommendations.len());
        assert_eq!(boosted.recommendations[0].category, "security");
        assert!(boosted.recommendations[0].automatable);
        assert_eq!(plain.overall_score, boosted.overall_score);
    }

    #[test]
    fn result_serializes_with_kebab_stage() {
        let result = AssessmentEngine::builtin()
            .evaluate(&all_answered(2), Stage::SeriesA, None)
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["stage"], "series-a");
        assert_eq!(json["level"], "basic");
    }
}
