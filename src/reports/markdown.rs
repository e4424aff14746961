//! Markdown report generator.

use super::escape::{escape_markdown_list, escape_markdown_table, escape_md_opt};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::engine::{AssessmentResult, CategoryFinding};
use std::fmt::Write;

/// Markdown reporter
pub struct MarkdownReporter {
    /// Include a table of contents
    include_toc: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { include_toc: false }
    }

    #[must_use]
    pub const fn with_toc(mut self) -> Self {
        self.include_toc = true;
        self
    }

    fn write_findings(
        &self,
        md: &mut String,
        heading: &str,
        findings: &[CategoryFinding],
    ) -> std::fmt::Result {
        if findings.is_empty() {
            return Ok(());
        }
        writeln!(md, "### {heading}\n")?;
        for finding in findings {
            match finding.gap {
                Some(gap) => writeln!(
                    md,
                    "- **{}**: {:.1} ({:+.1} vs benchmark)",
                    escape_markdown_list(&finding.category),
                    finding.score,
                    gap
                )?,
                None => writeln!(
                    md,
                    "- **{}**: {:.1}",
                    escape_markdown_list(&finding.category),
                    finding.score
                )?,
            }
        }
        writeln!(md)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        let title = config
            .title
            .as_deref()
            .unwrap_or("Engineering Maturity Assessment");
        writeln!(md, "# {}\n", escape_markdown_list(title))?;

        if let Some(ref generated_at) = config.metadata.generated_at {
            writeln!(md, "_Generated {generated_at}_\n")?;
        }

        if self.include_toc {
            writeln!(md, "- [Summary](#summary)")?;
            writeln!(md, "- [Categories](#categories)")?;
            writeln!(md, "- [Recommendations](#recommendations)\n")?;
        }

        writeln!(md, "## Summary\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Stage | {} |", result.stage.label())?;
        writeln!(md, "| Overall score | {:.1} / 100 |", result.overall_score)?;
        writeln!(
            md,
            "| Maturity level | {} ({}) |",
            result.level,
            result.level.description()
        )?;
        writeln!(
            md,
            "| Completion | {}/{} ({:.0}%) |",
            result.answered_questions,
            result.applicable_questions,
            result.completion_rate * 100.0
        )?;
        if let Some(ref path) = config.metadata.responses_path {
            writeln!(md, "| Responses | `{}` |", escape_markdown_table(path))?;
        }
        writeln!(md)?;

        writeln!(md, "## Categories\n")?;
        writeln!(md, "| Category | Score | Benchmark | Gap | Answered |")?;
        writeln!(md, "|----------|-------|-----------|-----|----------|")?;
        for score in result.category_scores.values() {
            let benchmark = result.benchmarks.get(&score.category).copied();
            let (value, gap) = if score.has_data() {
                (
                    format!("{:.1}", score.normalized),
                    benchmark.map(|b| format!("{:+.1}", score.normalized - b)),
                )
            } else {
                ("-".to_string(), None)
            };
            writeln!(
                md,
                "| {} | {} | {} | {} | {}/{} |",
                escape_markdown_table(&score.category),
                value,
                benchmark.map_or_else(|| "-".to_string(), |b| format!("{b:.0}")),
                escape_md_opt(gap.as_deref()),
                score.answered,
                score.applicable
            )?;
        }
        writeln!(md)?;

        self.write_findings(&mut md, "Strengths", &result.strengths)?;
        self.write_findings(&mut md, "Needs attention", &result.weaknesses)?;

        writeln!(md, "## Recommendations\n")?;
        let shown = config.limit(&result.recommendations);
        if shown.is_empty() {
            writeln!(md, "_No recommendations._\n")?;
        }
        for (i, rec) in shown.iter().enumerate() {
            let marker = if rec.is_quick_win() { " (quick win)" } else { "" };
            writeln!(
                md,
                "### {}. {}{marker}\n",
                i + 1,
                escape_markdown_list(&rec.title)
            )?;
            writeln!(
                md,
                "**Category:** {} | **Impact:** {} | **Effort:** {}\n",
                escape_markdown_list(&rec.category),
                rec.impact.name(),
                rec.effort.name()
            )?;
            if !rec.description.is_empty() {
                writeln!(md, "{}\n", escape_markdown_list(&rec.description))?;
            }
            if config.include_actions && !rec.action_items.is_empty() {
                for item in &rec.action_items {
                    writeln!(md, "- [ ] {}", escape_markdown_list(item))?;
                }
                writeln!(md)?;
            }
        }

        if config.include_warnings && !result.warnings.is_empty() {
            writeln!(md, "## Warnings\n")?;
            for warning in &result.warnings {
                writeln!(md, "- {}", escape_markdown_list(&warning.to_string()))?;
            }
            writeln!(md)?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
