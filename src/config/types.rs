//! Configuration types for octoflow.

use crate::model::Stage;
use crate::recommend::PrioritizationConfig;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files, with CLI arguments taking precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Stage and catalog sources
    pub assessment: AssessmentConfig,
    /// Recommendation priority multipliers
    pub prioritization: PrioritizationConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn default_stage(mut self, stage: Stage) -> Self {
        self.config.assessment.default_stage = stage;
        self
    }

    pub fn questions_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.assessment.questions_file = file;
        self
    }

    pub fn recommendations_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.assessment.recommendations_file = file;
        self
    }

    pub fn benchmarks_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.assessment.benchmarks_file = file;
        self
    }

    pub fn prioritization(mut self, prioritization: PrioritizationConfig) -> Self {
        self.config.prioritization = prioritization;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the overall score is below this threshold
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Stage and catalog sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Stage used when none is given on the command line
    pub default_stage: Stage,
    /// Question catalog (YAML or JSON); built-in catalog when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_file: Option<PathBuf>,
    /// Recommendation catalog (YAML or JSON); built-in catalog when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_file: Option<PathBuf>,
    /// Stage benchmark table (YAML or JSON); built-in table when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmarks_file: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with a failure code when the overall score is below this (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Suppress non-essential output
    pub quiet: bool,
}
