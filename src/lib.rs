//! **Engineering-practice maturity assessment for startups.**
//!
//! `octoflow` scores a team's answers to a questionnaire about engineering
//! practices, compares them with what is expected at the team's funding
//! stage, and recommends improvements ordered by impact, effort and the
//! repository's situation. It powers both a command-line interface and a
//! Rust library for embedding the scoring in other tools.
//!
//! ## Key Features
//!
//! - **Stage-aware scoring**: questions can be limited to some stages, and
//!   every stage has its own expected score and importance per category.
//! - **Weighted categories**: per-question weights inside a category,
//!   per-category importance in the overall score.
//! - **Prioritized recommendations**: gap-based and score-range based
//!   selection, ordered by impact, inverted effort and optional repository
//!   context, with a quick-win subset.
//! - **Custom catalogs**: questions, recommendations and benchmarks can be
//!   loaded from YAML or JSON.
//! - **Reporting**: terminal summary, JSON and Markdown.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: stages, questions, responses and recommendations.
//! - **[`catalog`]**: the validated, read-only registries scored against.
//! - **[`scoring`]**: per-category aggregation and the overall score.
//! - **[`recommend`]**: recommendation selection and prioritization.
//! - **[`engine`]**: [`AssessmentEngine`], which ties the above together.
//! - **[`reports`]**: output generators.
//!
//! ## Getting Started
//!
//! ```
//! use octoflow::{AssessmentEngine, RecommendationContext, ResponseSet, Stage};
//!
//! let engine = AssessmentEngine::builtin();
//! let responses = ResponseSet::new()
//!     .with("sec-dependency-scanning", 2)
//!     .with("sec-secret-management", 1)
//!     .with("rel-ci-pipeline", 4);
//! let context = RecommendationContext::default().public(true).with_ci(true);
//!
//! let result = engine
//!     .evaluate(&responses, Stage::SeriesA, Some(&context))
//!     .expect("built-in benchmarks cover every stage");
//!
//! println!("{:.1} / 100 ({})", result.overall_score, result.level);
//! for rec in result.recommendations.iter().take(3) {
//!     println!("- [{}] {}", rec.category, rec.title);
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Question counts and score math mix usize and f64
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use catalog::{BenchmarkTable, QuestionCatalog, RecommendationCatalog, StageBenchmark};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{AssessmentConfig, BehaviorConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use engine::{AssessmentEngine, AssessmentResult, CategoryFinding};
pub use error::{ErrorContext, OctoflowError, OptionContext, Result};
pub use model::{
    Effort, Impact, Question, Recommendation, RecommendationContext, Response, ResponseSet,
    ScoreRange, Stage,
};
pub use recommend::{PrioritizationConfig, Prioritizer};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{CategoryScore, MaturityLevel, ScoringWarning};
