//! Named configuration presets.

use super::types::{AppConfig, AssessmentConfig, BehaviorConfig, OutputConfig};
use crate::recommend::PrioritizationConfig;
use crate::reports::ReportFormat;

/// Threshold used by the `ci` preset when no `min_score` is configured
pub const DEFAULT_CI_MIN_SCORE: f64 = 50.0;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Built-in catalogs, summary output, no failure threshold
    Default,
    /// Machine-readable output that fails below a minimum score
    Ci,
    /// Stronger security weighting for public and open-source projects
    SecurityFirst,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::SecurityFirst => "security-first",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "security-first" | "security" => Some(Self::SecurityFirst),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Built-in catalogs with a human-readable summary",
            Self::Ci => "JSON output, quiet, fails when the overall score is below 50",
            Self::SecurityFirst => "Ranks security and automatable actions ahead of the rest",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::SecurityFirst]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::SecurityFirst => Self::security_first_preset(),
        }
    }

    /// CI pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail below [`DEFAULT_CI_MIN_SCORE`]
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            assessment: AssessmentConfig::default(),
            prioritization: PrioritizationConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            behavior: BehaviorConfig {
                min_score: Some(DEFAULT_CI_MIN_SCORE),
                quiet: true,
            },
        }
    }

    /// Security-first preset.
    ///
    /// Public-repository security boost raised to 3x and automatable
    /// actions to 2x.
    #[must_use]
    pub fn security_first_preset() -> Self {
        Self {
            prioritization: PrioritizationConfig {
                public_security_boost: 3.0,
                automatable_boost: 2.0,
                ..PrioritizationConfig::default()
            },
            ..Self::default()
        }
    }
}
