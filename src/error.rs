//! Unified error types for octoflow.
//!
//! Only configuration-level problems (unknown stage, malformed or empty
//! catalogs) surface as errors. Per-item problems found while scoring a
//! response set are reported as [`crate::scoring::ScoringWarning`] values
//! and never abort an evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for octoflow operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OctoflowError {
    /// Catalog, benchmark or stage configuration is invalid
    #[error("Invalid configuration: {context}")]
    Configuration {
        context: String,
        #[source]
        source: ConfigurationErrorKind,
    },

    /// Input file could not be decoded
    #[error("Failed to parse {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific configuration error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigurationErrorKind {
    #[error("Unknown stage '{0}' (expected one of: pre-seed, seed, series-a, series-b)")]
    UnknownStage(String),

    #[error("No benchmarks configured for stage '{0}'")]
    MissingBenchmarks(String),

    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Entry '{id}' has an empty category")]
    EmptyCategory { id: String },

    #[error("Question '{id}' has invalid weight {weight} (must be finite, > 0 and at most {max})")]
    InvalidWeight { id: String, weight: f64, max: f64 },

    #[error("Question '{id}' does not apply to any stage")]
    NoApplicableStages { id: String },

    #[error("Recommendation '{id}' has invalid score range [{min}, {max}]")]
    InvalidScoreRange { id: String, min: f64, max: f64 },

    #[error("Benchmark for '{category}' at {stage} is {value} (must be within 0-100)")]
    InvalidBenchmark {
        stage: String,
        category: String,
        value: f64,
    },

    #[error("Importance for '{category}' at {stage} is {value} (must be finite, > 0 and at most {max})")]
    InvalidImportance {
        stage: String,
        category: String,
        value: f64,
        max: f64,
    },

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for octoflow operations
pub type Result<T> = std::result::Result<T, OctoflowError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OctoflowError {
    /// Create a configuration error with context
    pub fn configuration(context: impl Into<String>, source: ConfigurationErrorKind) -> Self {
        Self::Configuration {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error for an unrecognized stage name
    pub fn unknown_stage(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::configuration(
            format!("stage '{name}'"),
            ConfigurationErrorKind::UnknownStage(name),
        )
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The configuration error kind, if this is a configuration error
    #[must_use]
    pub const fn configuration_kind(&self) -> Option<&ConfigurationErrorKind> {
        match self {
            Self::Configuration { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for OctoflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for OctoflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON input", ParseErrorKind::InvalidJson(err.to_string()))
    }
}

impl From<serde_yaml_ng::Error> for OctoflowError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::parse("YAML input", ParseErrorKind::InvalidYaml(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context, so a chain
/// reads outermost first:
///
/// ```ignore
/// use octoflow::error::ErrorContext;
///
/// let catalog = load_question_catalog(path)
///     .with_context(|| format!("loading questions from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<OctoflowError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: OctoflowError, new_ctx: &str) -> OctoflowError {
    match err {
        OctoflowError::Configuration {
            context: existing,
            source,
        } => OctoflowError::Configuration {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OctoflowError::Parse {
            context: existing,
            source,
        } => OctoflowError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OctoflowError::Io {
            path,
            message,
            source,
        } => OctoflowError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        OctoflowError::Validation(msg) => OctoflowError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| OctoflowError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| OctoflowError::Validation(f().into()))
    }
}
