//! Stage benchmarks: expected category scores and category importance.

use crate::error::{ConfigurationErrorKind, OctoflowError, Result};
use crate::model::categories::{
    COLLABORATION, DOCUMENTATION, MAINTAINABILITY, RELIABILITY, SECURITY, VELOCITY,
};
use crate::model::{MAX_SCORE, MAX_WEIGHT, Stage};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Importance used for categories without a configured weight
pub const DEFAULT_IMPORTANCE: f64 = 1.0;

/// Benchmarks for one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageBenchmark {
    pub stage: Stage,
    /// Target normalized score per category (0-100)
    pub expected_scores: IndexMap<String, f64>,
    /// Importance of each category in the overall score
    #[serde(default)]
    pub weights: IndexMap<String, f64>,
}

impl StageBenchmark {
    /// Benchmark with expected scores and no explicit weights
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            expected_scores: IndexMap::new(),
            weights: IndexMap::new(),
        }
    }

    /// Set the expected score and importance for a category
    #[must_use]
    pub fn with_category(mut self, category: &str, expected: f64, importance: f64) -> Self {
        self.expected_scores.insert(category.to_string(), expected);
        self.weights.insert(category.to_string(), importance);
        self
    }

    /// Expected score for `category`, if benchmarked
    #[must_use]
    pub fn expected(&self, category: &str) -> Option<f64> {
        self.expected_scores.get(category).copied()
    }

    /// Importance of `category`, falling back to [`DEFAULT_IMPORTANCE`]
    #[must_use]
    pub fn importance(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_IMPORTANCE)
    }

    fn validate(&self) -> Result<()> {
        let context = || format!("benchmarks for {}", self.stage);

        for (category, &value) in &self.expected_scores {
            if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
                return Err(OctoflowError::configuration(
                    context(),
                    ConfigurationErrorKind::InvalidBenchmark {
                        stage: self.stage.to_string(),
                        category: category.clone(),
                        value,
                    },
                ));
            }
        }
        for (category, &value) in &self.weights {
            if !value.is_finite() || value <= 0.0 || value > MAX_WEIGHT {
                return Err(OctoflowError::configuration(
                    context(),
                    ConfigurationErrorKind::InvalidImportance {
                        stage: self.stage.to_string(),
                        category: category.clone(),
                        value,
                        max: MAX_WEIGHT,
                    },
                ));
            }
        }
        Ok(())
    }
}

/// Benchmarks for every configured stage
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    stages: IndexMap<Stage, StageBenchmark>,
}

impl BenchmarkTable {
    /// Build a table, rejecting duplicate stages and out-of-range values
    pub fn new(benchmarks: Vec<StageBenchmark>) -> Result<Self> {
        if benchmarks.is_empty() {
            return Err(OctoflowError::configuration(
                "benchmark table",
                ConfigurationErrorKind::EmptyCatalog("benchmark"),
            ));
        }

        let mut stages = IndexMap::with_capacity(benchmarks.len());
        for benchmark in benchmarks {
            benchmark.validate()?;
            if stages.contains_key(&benchmark.stage) {
                return Err(OctoflowError::configuration(
                    "benchmark table",
                    ConfigurationErrorKind::DuplicateId {
                        kind: "benchmark stage",
                        id: benchmark.stage.to_string(),
                    },
                ));
            }
            stages.insert(benchmark.stage, benchmark);
        }

        Ok(Self { stages })
    }

    /// Built-in benchmarks for all four stages
    ///
    /// Skips [`BenchmarkTable::new`]; `test_builtin_passes_validation` runs
    /// the built-in stages through it instead.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            stages: builtin_stages().into_iter().map(|b| (b.stage, b)).collect(),
        }
    }

    /// Benchmarks for `stage`.
    ///
    /// Fails with a configuration error when the table has no entry for the
    /// stage (only possible with a user-supplied table).
    pub fn resolve(&self, stage: Stage) -> Result<&StageBenchmark> {
        self.stages.get(&stage).ok_or_else(|| {
            OctoflowError::configuration(
                format!("resolving benchmarks for {stage}"),
                ConfigurationErrorKind::MissingBenchmarks(stage.to_string()),
            )
        })
    }

    /// Resolve benchmarks from a stage name as supplied by a caller
    pub fn resolve_named(&self, stage: &str) -> Result<&StageBenchmark> {
        self.resolve(stage.parse()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageBenchmark> {
        self.stages.values()
    }
}

/// Built-in stage benchmarks, one per stage
fn builtin_stages() -> Vec<StageBenchmark> {
    vec![
        StageBenchmark::new(Stage::PreSeed)
            .with_category(SECURITY, 50.0, 1.0)
            .with_category(RELIABILITY, 40.0, 1.0)
            .with_category(MAINTAINABILITY, 45.0, 1.0)
            .with_category(COLLABORATION, 35.0, 0.8)
            .with_category(VELOCITY, 60.0, 1.5)
            .with_category(DOCUMENTATION, 30.0, 0.7),
        StageBenchmark::new(Stage::Seed)
            .with_category(SECURITY, 70.0, 1.2)
            .with_category(RELIABILITY, 60.0, 1.1)
            .with_category(MAINTAINABILITY, 60.0, 1.0)
            .with_category(COLLABORATION, 55.0, 0.9)
            .with_category(VELOCITY, 70.0, 1.3)
            .with_category(DOCUMENTATION, 50.0, 0.8),
        StageBenchmark::new(Stage::SeriesA)
            .with_category(SECURITY, 80.0, 1.4)
            .with_category(RELIABILITY, 75.0, 1.2)
            .with_category(MAINTAINABILITY, 70.0, 1.0)
            .with_category(COLLABORATION, 70.0, 1.0)
            .with_category(VELOCITY, 75.0, 1.1)
            .with_category(DOCUMENTATION, 65.0, 0.9),
        StageBenchmark::new(Stage::SeriesB)
            .with_category(SECURITY, 90.0, 1.5)
            .with_category(RELIABILITY, 85.0, 1.3)
            .with_category(MAINTAINABILITY, 80.0, 1.1)
            .with_category(COLLABORATION, 80.0, 1.0)
            .with_category(VELOCITY, 80.0, 1.0)
            .with_category(DOCUMENTATION, 75.0, 1.0),
    ]
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::builtin()
    }
}
