//! Catalog listing handlers.
//!
//! Implements the `questions` and `benchmarks` subcommands.

use crate::catalog::StageBenchmark;
use crate::config::AppConfig;
use crate::model::{Question, Stage};
use crate::pipeline::{OutputTarget, auto_detect_format, build_engine, exit_codes, write_output};
use crate::reports::ReportFormat;
use crate::reports::escape::escape_markdown_table;
use anyhow::Result;
use std::fmt::Write as _;

/// Configuration shared by the listing commands
#[derive(Debug, Clone)]
pub struct CatalogListing {
    /// Only list entries for this stage
    pub stage: Option<Stage>,
    pub app: AppConfig,
}

impl CatalogListing {
    fn target(&self) -> OutputTarget {
        OutputTarget::from_option(self.app.output.file.clone())
    }
}

/// List the question catalog, optionally restricted to one stage.
pub fn run_questions(listing: CatalogListing) -> Result<i32> {
    let engine = build_engine(&listing.app.assessment, &listing.app.prioritization)?;
    let questions: Vec<&Question> = match listing.stage {
        Some(stage) => engine.questions().applicable(stage).collect(),
        None => engine.questions().iter().collect(),
    };

    let target = listing.target();
    let text = match auto_detect_format(listing.app.output.format, &target) {
        ReportFormat::Json => serde_json::to_string_pretty(&questions)?,
        ReportFormat::Markdown => questions_markdown(&questions)?,
        ReportFormat::Auto | ReportFormat::Summary => questions_text(&questions)?,
    };

    write_output(&text, &target, listing.app.behavior.quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// List stage benchmarks, optionally for one stage only.
pub fn run_benchmarks(listing: CatalogListing) -> Result<i32> {
    let engine = build_engine(&listing.app.assessment, &listing.app.prioritization)?;
    let benchmarks: Vec<&StageBenchmark> = match listing.stage {
        Some(stage) => vec![engine.benchmarks().resolve(stage)?],
        None => engine.benchmarks().iter().collect(),
    };

    let target = listing.target();
    let text = match auto_detect_format(listing.app.output.format, &target) {
        ReportFormat::Json => serde_json::to_string_pretty(&benchmarks)?,
        ReportFormat::Markdown => benchmarks_markdown(&benchmarks)?,
        ReportFormat::Auto | ReportFormat::Summary => benchmarks_text(&benchmarks)?,
    };

    write_output(&text, &target, listing.app.behavior.quiet)?;
    Ok(exit_codes::SUCCESS)
}

fn stage_list(question: &Question) -> String {
    if question.applicable_stages.len() == Stage::all().len() {
        "all".to_string()
    } else {
        question
            .applicable_stages
            .iter()
            .map(Stage::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn questions_text(questions: &[&Question]) -> Result<String> {
    let mut out = String::new();
    let mut category = "";
    for q in questions {
        if q.category != category {
            category = &q.category;
            writeln!(out, "\n{category}")?;
        }
        writeln!(out, "  {:<26} x{:<4} {}", q.id, q.weight, q.text)?;
        writeln!(out, "  {:<26} {:5} stages: {}", "", "", stage_list(q))?;
    }
    writeln!(out, "\n{} questions", questions.len())?;
    Ok(out)
}

fn questions_markdown(questions: &[&Question]) -> Result<String> {
    let mut out = String::from("| ID | Category | Weight | Stages | Question |\n");
    out.push_str("|----|----------|--------|--------|----------|\n");
    for q in questions {
        writeln!(
            out,
            "| `{}` | {} | {} | {} | {} |",
            escape_markdown_table(&q.id),
            escape_markdown_table(&q.category),
            q.weight,
            stage_list(q),
            escape_markdown_table(&q.text)
        )?;
    }
    Ok(out)
}

fn benchmarks_text(benchmarks: &[&StageBenchmark]) -> Result<String> {
    let mut out = String::new();
    for benchmark in benchmarks {
        writeln!(out, "{}", benchmark.stage.label())?;
        for (category, expected) in &benchmark.expected_scores {
            writeln!(
                out,
                "  {:<16} target {:>5.1}  importance {:.1}",
                category,
                expected,
                benchmark.importance(category)
            )?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn benchmarks_markdown(benchmarks: &[&StageBenchmark]) -> Result<String> {
    let mut out = String::from("| Stage | Category | Target | Importance |\n");
    out.push_str("|-------|----------|--------|------------|\n");
    for benchmark in benchmarks {
        for (category, expected) in &benchmark.expected_scores {
            writeln!(
                out,
                "| {} | {} | {:.0} | {:.1} |",
                benchmark.stage.label(),
                escape_markdown_table(category),
                expected,
                benchmark.importance(category)
            )?;
        }
    }
    Ok(out)
}
