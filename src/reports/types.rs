//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Human-readable terminal summary
    Summary,
    /// Structured JSON output
    Json,
    /// Markdown document
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum recommendations listed; `None` lists all
    pub max_recommendations: Option<usize>,
    /// Include the action items of each recommendation
    pub include_actions: bool,
    /// Include scoring warnings (dropped responses, unanswered categories)
    pub include_warnings: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            max_recommendations: None,
            include_actions: true,
            include_warnings: true,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// The recommendations to list, honoring `max_recommendations`
    pub fn limit<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.max_recommendations {
            Some(max) if max < items.len() => &items[..max],
            _ => items,
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Responses file the assessment was computed from
    pub responses_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Stamp with the current UTC time
    #[must_use]
    pub fn stamped(mut self) -> Self {
        self.generated_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    #[must_use]
    pub fn with_responses_path(mut self, path: impl Into<String>) -> Self {
        self.responses_path = Some(path.into());
        self
    }
}
