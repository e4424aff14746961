//! Report output stage.

use super::{OutputTarget, auto_detect_format, should_use_color, write_output};
use crate::config::OutputConfig;
use crate::engine::AssessmentResult;
use crate::reports::{ReportConfig, create_reporter_with_options};
use anyhow::Result;

/// Render an assessment and write it to the configured destination.
///
/// Resolves `auto` against the output target and disables color for
/// files and when `NO_COLOR` is set.
pub fn output_report(
    output: &OutputConfig,
    result: &AssessmentResult,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);
    let use_color = should_use_color(output.no_color, &target);

    tracing::debug!("Rendering {} report", format);
    let reporter = create_reporter_with_options(format, use_color);
    let report = reporter.generate_assessment_report(result, report_config)?;
    write_output(&report, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AssessmentEngine;
    use crate::model::{ResponseSet, Stage};
    use crate::reports::ReportFormat;

    #[test]
    fn test_output_report_to_json_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("assessment.json");
        let output = OutputConfig {
            format: ReportFormat::Auto,
            file: Some(path.clone()),
            no_color: false,
        };
        let result = AssessmentEngine::builtin()
            .evaluate(&ResponseSet::new().with("rel-ci-pipeline", 3), Stage::Seed, None)
            .unwrap();

        output_report(&output, &result, &ReportConfig::default(), true).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["stage"], "seed");
    }
}
