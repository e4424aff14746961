//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::engine::{AssessmentResult, CategoryFinding};
use crate::scoring::MaturityLevel;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn level_color(level: MaturityLevel) -> &'static str {
    match level {
        MaturityLevel::Advanced => "green",
        MaturityLevel::Proactive => "cyan",
        MaturityLevel::Basic => "yellow",
        MaturityLevel::Initial => "red",
    }
}

/// Width of the score bar in characters
const BAR_WIDTH: usize = 20;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn bar(&self, score: f64, benchmark: Option<f64>) -> String {
        let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let color = match benchmark {
            Some(b) if score >= b => "green",
            Some(_) => "red",
            None => "dim",
        };
        self.color(&bar, color)
    }

    fn finding_line(&self, finding: &CategoryFinding) -> String {
        match finding.gap {
            Some(gap) => format!(
                "  {:<16} {:>5.1}  ({:+.1} vs benchmark)",
                finding.category, finding.score, gap
            ),
            None => format!("  {:<16} {:>5.1}", finding.category, finding.score),
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config
            .title
            .as_deref()
            .unwrap_or("Engineering Maturity Assessment");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("Stage:", "cyan"),
            result.stage.label()
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Score:", "cyan"),
            self.color(
                &format!("{:.1}/100", result.overall_score),
                level_color(result.level)
            ),
            result.level
        ));
        lines.push(format!(
            "{}  {}/{} questions ({:.0}%)",
            self.color("Answered:", "cyan"),
            result.answered_questions,
            result.applicable_questions,
            result.completion_rate * 100.0
        ));

        lines.push(String::new());
        lines.push(self.color("Categories:", "bold"));
        for score in result.category_scores.values() {
            let benchmark = result.benchmarks.get(&score.category).copied();
            if !score.has_data() {
                lines.push(format!(
                    "  {:<16} {}",
                    score.category,
                    self.color("not answered", "dim")
                ));
                continue;
            }
            let target = benchmark.map_or_else(String::new, |b| format!("  target {b:.0}"));
            lines.push(format!(
                "  {:<16} {} {:>5.1}{}",
                score.category,
                self.bar(score.normalized, benchmark),
                score.normalized,
                self.color(&target, "dim")
            ));
        }

        if !result.strengths.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Strengths:", "bold"));
            for finding in &result.strengths {
                lines.push(self.color(&self.finding_line(finding), "green"));
            }
        }
        if !result.weaknesses.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Needs attention:", "bold"));
            for finding in &result.weaknesses {
                lines.push(self.color(&self.finding_line(finding), "red"));
            }
        }

        if !result.quick_wins.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Quick wins:", "bold"));
            for rec in &result.quick_wins {
                lines.push(format!("  {} {}", self.color("★", "yellow"), rec.title));
            }
        }

        lines.push(String::new());
        lines.push(self.color("Recommendations:", "bold"));
        let shown = config.limit(&result.recommendations);
        if shown.is_empty() {
            lines.push(format!("  {}", self.color("Nothing to recommend", "dim")));
        }
        for (i, rec) in shown.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {}",
                i + 1,
                rec.title,
                self.color(
                    &format!(
                        "[{}, impact {}, effort {}]",
                        rec.category,
                        rec.impact.name(),
                        rec.effort.name()
                    ),
                    "dim"
                )
            ));
            if config.include_actions {
                for item in &rec.action_items {
                    lines.push(format!("       - {item}"));
                }
            }
        }
        let hidden = result.recommendations.len() - shown.len();
        if hidden > 0 {
            lines.push(self.color(&format!("  ... and {hidden} more"), "dim"));
        }

        if config.include_warnings && !result.warnings.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Warnings:", "bold"));
            for warning in &result.warnings {
                lines.push(format!("  {} {warning}", self.color("!", "yellow")));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
