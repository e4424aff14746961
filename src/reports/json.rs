//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::engine::AssessmentResult;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonAssessmentReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                responses_path: config.metadata.responses_path.as_deref(),
                title: config.title.as_deref(),
            },
            assessment: trimmed(result, config),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata<'a>,
    #[serde(flatten)]
    assessment: AssessmentResult,
}

/// Apply the recommendation limit and warning filter
fn trimmed(result: &AssessmentResult, config: &ReportConfig) -> AssessmentResult {
    let mut assessment = result.clone();
    let keep = config.limit(&result.recommendations).len();
    assessment.recommendations.truncate(keep);
    if !config.include_warnings {
        assessment.warnings.clear();
    }
    assessment
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    responses_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}
