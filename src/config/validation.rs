//! Configuration validation for octoflow.

use super::types::{AppConfig, AssessmentConfig, BehaviorConfig, OutputConfig};
use crate::model::MAX_SCORE;
use crate::recommend::PrioritizationConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.assessment.validate());
        errors.extend(self.prioritization.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("assessment.questions_file", &self.questions_file),
            ("assessment.recommendations_file", &self.recommendations_file),
            ("assessment.benchmarks_file", &self.benchmarks_file),
        ]
        .into_iter()
        .filter_map(|(field, path)| {
            let path = path.as_ref()?;
            (!path.exists())
                .then(|| ConfigError::new(field, format!("File not found: {}", path.display())))
        })
        .collect()
    }
}

impl Validatable for PrioritizationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let multipliers = [
            ("public_security_boost", self.public_security_boost),
            (
                "small_repo_maintainability_boost",
                self.small_repo_maintainability_boost,
            ),
            (
                "high_pr_volume_collaboration_boost",
                self.high_pr_volume_collaboration_boost,
            ),
            ("ci_reliability_boost", self.ci_reliability_boost),
            ("automatable_boost", self.automatable_boost),
        ];

        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ConfigError::new(
                    format!("prioritization.{name}"),
                    format!("Multiplier must be a positive number, got {value}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError::new(
                "output.file",
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score
            && !(0.0..=MAX_SCORE).contains(&min)
        {
            errors.push(ConfigError::new(
                "behavior.min_score",
                format!("Minimum score must be between 0 and {MAX_SCORE}, got {min}"),
            ));
        }
        errors
    }
}
