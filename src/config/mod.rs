//! Configuration module for octoflow.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use octoflow::config::{AppConfig, ConfigPreset, Validatable};
//! use octoflow::model::Stage;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//! assert!(config.is_valid());
//!
//! let config = AppConfig::builder()
//!     .default_stage(Stage::SeriesA)
//!     .min_score(Some(60.0))
//!     .build();
//! assert_eq!(config.assessment.default_stage, Stage::SeriesA);
//! ```
//!
//! # Configuration File
//!
//! Place a `.octoflow.yaml` file in your project root or `~/.config/octoflow/`:
//!
//! ```yaml
//! assessment:
//!   default_stage: series-a
//! prioritization:
//!   public_security_boost: 2.5
//! behavior:
//!   min_score: 60
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_CI_MIN_SCORE};
pub use types::{AppConfig, AppConfigBuilder, AssessmentConfig, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, generate_full_example_config,
    load_config, load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option that can be set in `.octoflow.yaml`, for editor
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
