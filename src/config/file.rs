//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::model::Stage;
use crate::recommend::PrioritizationConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".octoflow.yaml",
    ".octoflow.yml",
    "octoflow.yaml",
    "octoflow.yml",
];

/// Directory under the user config dir that holds a global config
const CONFIG_DIR_NAME: &str = "octoflow";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/octoflow/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// The per-user config directory, e.g. `~/.config/octoflow`
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to YAML null; treat it as all defaults
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config for a run.
///
/// An explicit path must exist and parse; its errors are returned. Without
/// one, the discovered file is loaded leniently via [`load_or_default`].
pub fn load_config(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    match explicit_path {
        Some(path) => {
            let config = load_config_file(path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path.to_path_buf())))
        }
        None => Ok(load_or_default(None)),
    }
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Fields of `other` left at their defaults do not override. This is
    /// how CLI args are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        if other.assessment.default_stage != Stage::default() {
            self.assessment.default_stage = other.assessment.default_stage;
        }
        if other.assessment.questions_file.is_some() {
            self.assessment
                .questions_file
                .clone_from(&other.assessment.questions_file);
        }
        if other.assessment.recommendations_file.is_some() {
            self.assessment
                .recommendations_file
                .clone_from(&other.assessment.recommendations_file);
        }
        if other.assessment.benchmarks_file.is_some() {
            self.assessment
                .benchmarks_file
                .clone_from(&other.assessment.benchmarks_file);
        }

        if other.prioritization != PrioritizationConfig::default() {
            self.prioritization = other.prioritization.clone();
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# octoflow configuration
# Place this file at .octoflow.yaml in your project root or ~/.config/octoflow/

{}",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# octoflow configuration file
# ============================
#
# Place it at:
#   - .octoflow.yaml in your project root
#   - ~/.config/octoflow/octoflow.yaml for global config
#
# CLI arguments always override file settings.

# Stage and catalog sources
assessment:
  # Stage used when --stage is omitted: pre-seed, seed, series-a, series-b
  default_stage: seed
  # Custom catalogs (YAML or JSON); the built-in ones are used when omitted
  # questions_file: ./questions.yaml
  # recommendations_file: ./recommendations.yaml
  # benchmarks_file: ./benchmarks.yaml

# Recommendation priority multipliers (applied only when repository
# context is supplied)
prioritization:
  public_security_boost: 2.0
  small_repo_maintainability_boost: 1.5
  high_pr_volume_collaboration_boost: 1.3
  ci_reliability_boost: 1.2
  automatable_boost: 1.5
  small_repo_max_kb: 5000
  high_pr_volume_min: 10

# Output configuration
output:
  # Format: auto, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: assessment.json
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 when the overall score is below this (0-100)
  # min_score: 60
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
