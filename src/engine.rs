//! Assessment engine.
//!
//! Runs the full scoring pass: aggregate responses per category, resolve the
//! stage benchmarks, combine an overall score, then select and prioritize
//! recommendations.
//!
//! # Usage
//!
//! ```
//! use octoflow::engine::AssessmentEngine;
//! use octoflow::model::{ResponseSet, Stage};
//!
//! let engine = AssessmentEngine::builtin();
//! let responses = ResponseSet::new()
//!     .with("sec-dependency-scanning", 1)
//!     .with("rel-ci-pipeline", 4);
//!
//! let result = engine.evaluate(&responses, Stage::Seed, None).unwrap();
//! println!("{:.1} ({})", result.overall_score, result.level);
//! for rec in &result.quick_wins {
//!     println!("- {}", rec.title);
//! }
//! ```

use crate::catalog::{BenchmarkTable, QuestionCatalog, RecommendationCatalog, StageBenchmark};
use crate::error::Result;
use crate::model::{Recommendation, RecommendationContext, ResponseSet, Stage};
use crate::recommend::{PrioritizationConfig, Prioritizer, generate, quick_wins};
use crate::scoring::{
    CategoryScore, MaturityLevel, ScoringWarning, aggregate, combine, completion_rate,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Assessment engine version, bumped when scoring semantics change
pub const ENGINE_VERSION: &str = "1.0";

/// Category scores at or above this count as strengths when unbenchmarked
const UNBENCHMARKED_STRENGTH: f64 = 70.0;
/// Category scores below this count as weaknesses when unbenchmarked
const UNBENCHMARKED_WEAKNESS: f64 = 50.0;

/// A category called out as a strength or weakness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFinding {
    pub category: String,
    /// Normalized category score
    pub score: f64,
    /// Stage benchmark, if the category has one
    pub benchmark: Option<f64>,
    /// `score - benchmark`; negative when below target
    pub gap: Option<f64>,
}

/// Complete result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AssessmentResult {
    pub engine_version: String,
    pub stage: Stage,
    /// Weighted overall score (0-100)
    pub overall_score: f64,
    pub level: MaturityLevel,
    /// Per-category scores in catalog order
    pub category_scores: IndexMap<String, CategoryScore>,
    /// Expected score per category for the stage
    pub benchmarks: IndexMap<String, f64>,
    /// Answered / applicable questions (0-1)
    pub completion_rate: f64,
    pub answered_questions: usize,
    pub applicable_questions: usize,
    pub strengths: Vec<CategoryFinding>,
    pub weaknesses: Vec<CategoryFinding>,
    /// Selected recommendations, highest priority first
    pub recommendations: Vec<Recommendation>,
    /// High-impact, low-effort subset of `recommendations`, same order
    pub quick_wins: Vec<Recommendation>,
    /// Dropped responses and degenerate categories
    pub warnings: Vec<ScoringWarning>,
}

/// Scores response sets against read-only catalogs
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    questions: QuestionCatalog,
    recommendations: RecommendationCatalog,
    benchmarks: BenchmarkTable,
    prioritizer: Prioritizer,
}

impl AssessmentEngine {
    /// Create an engine from validated catalogs
    #[must_use]
    pub fn new(
        questions: QuestionCatalog,
        recommendations: RecommendationCatalog,
        benchmarks: BenchmarkTable,
    ) -> Self {
        Self {
            questions,
            recommendations,
            benchmarks,
            prioritizer: Prioritizer::default(),
        }
    }

    /// Engine over the built-in catalogs and benchmarks
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            QuestionCatalog::builtin(),
            RecommendationCatalog::builtin(),
            BenchmarkTable::builtin(),
        )
    }

    /// Replace the prioritization multipliers
    #[must_use]
    pub fn with_prioritization(mut self, config: PrioritizationConfig) -> Self {
        self.prioritizer = Prioritizer::new(config);
        self
    }

    #[must_use]
    pub const fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    #[must_use]
    pub const fn recommendations(&self) -> &RecommendationCatalog {
        &self.recommendations
    }

    #[must_use]
    pub const fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    /// Evaluate a response set at `stage`.
    ///
    /// Only fails when the benchmark table has no entry for `stage`.
    /// Malformed responses are dropped and listed in
    /// [`AssessmentResult::warnings`].
    pub fn evaluate(
        &self,
        responses: &ResponseSet,
        stage: Stage,
        context: Option<&RecommendationContext>,
    ) -> Result<AssessmentResult> {
        let benchmark = self.benchmarks.resolve(stage)?;
        let aggregation = aggregate(responses, &self.questions, stage);
        let overall = combine(&aggregation.scores, benchmark);

        let candidates = generate(&aggregation.scores, benchmark, &self.recommendations, stage);
        let recommendations = self.prioritizer.prioritize(candidates, context);
        let quick_wins = quick_wins(&recommendations);

        let (strengths, weaknesses) = classify(&aggregation.scores, benchmark);

        tracing::debug!(
            "Evaluated {} responses at {}: overall {:.1} ({}), {} recommendations",
            responses.len(),
            stage,
            overall.score,
            overall.level,
            recommendations.len()
        );

        Ok(AssessmentResult {
            engine_version: ENGINE_VERSION.to_string(),
            stage,
            overall_score: overall.score,
            level: overall.level,
            benchmarks: benchmark.expected_scores.clone(),
            completion_rate: completion_rate(aggregation.answered, aggregation.applicable),
            answered_questions: aggregation.answered,
            applicable_questions: aggregation.applicable,
            category_scores: aggregation.scores,
            strengths,
            weaknesses,
            recommendations,
            quick_wins,
            warnings: aggregation.warnings,
        })
    }

    /// Evaluate with a stage name supplied by a caller
    pub fn evaluate_named(
        &self,
        responses: &ResponseSet,
        stage: &str,
        context: Option<&RecommendationContext>,
    ) -> Result<AssessmentResult> {
        self.evaluate(responses, stage.parse()?, context)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Split answered categories into strengths and weaknesses
fn classify(
    scores: &IndexMap<String, CategoryScore>,
    benchmark: &StageBenchmark,
) -> (Vec<CategoryFinding>, Vec<CategoryFinding>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for score in scores.values().filter(|s| s.has_data()) {
        let expected = benchmark.expected(&score.category);
        let finding = CategoryFinding {
            category: score.category.clone(),
            score: score.normalized,
            benchmark: expected,
            gap: expected.map(|e| score.normalized - e),
        };

        match expected {
            Some(e) if score.normalized >= e => strengths.push(finding),
            Some(_) => weaknesses.push(finding),
            None if score.normalized >= UNBENCHMARKED_STRENGTH => strengths.push(finding),
            None if score.normalized < UNBENCHMARKED_WEAKNESS => weaknesses.push(finding),
            None => {}
        }
    }

    (strengths, weaknesses)
}
