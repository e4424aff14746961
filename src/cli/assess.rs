//! Assess command handler.
//!
//! Implements the `assess` subcommand: score a response file and report
//! recommendations.

use crate::config::{AppConfig, Validatable};
use crate::model::{RecommendationContext, Stage};
use crate::pipeline::{
    PipelineError, build_engine, exit_codes, load_context, load_responses_with_context,
    output_report,
};
use crate::reports::{ReportConfig, ReportMetadata};
use anyhow::{Result, bail};
use std::path::PathBuf;

/// Assess command configuration
#[derive(Debug, Clone)]
pub struct AssessConfig {
    /// Response file (JSON or YAML)
    pub responses_path: PathBuf,
    /// Stage to assess against; `None` uses the configured default
    pub stage: Option<Stage>,
    /// Repository context file
    pub context_path: Option<PathBuf>,
    /// Context given directly on the command line, merged over the file
    pub context_overrides: ContextOverrides,
    /// Maximum recommendations listed in the report
    pub max_recommendations: Option<usize>,
    /// Omit action items from the report
    pub hide_actions: bool,
    /// Effective application config (file merged with CLI flags)
    pub app: AppConfig,
}

/// Repository facts passed as flags
#[derive(Debug, Clone, Default)]
pub struct ContextOverrides {
    pub is_public: bool,
    pub has_ci: bool,
    pub repository_size_kb: Option<u64>,
    pub recent_pr_count: Option<u32>,
}

impl ContextOverrides {
    fn is_empty(&self) -> bool {
        !self.is_public
            && !self.has_ci
            && self.repository_size_kb.is_none()
            && self.recent_pr_count.is_none()
    }

    fn apply(&self, mut ctx: RecommendationContext) -> RecommendationContext {
        ctx.is_public |= self.is_public;
        ctx.has_ci |= self.has_ci;
        if self.repository_size_kb.is_some() {
            ctx.repository_size_kb = self.repository_size_kb;
        }
        if self.recent_pr_count.is_some() {
            ctx.recent_pr_count = self.recent_pr_count;
        }
        ctx
    }
}

/// Resolve the recommendation context.
///
/// `None` when neither a file nor any flag supplies one, in which case no
/// context multipliers are applied.
fn resolve_context(config: &AssessConfig) -> Result<Option<RecommendationContext>> {
    let base = match config.context_path.as_deref() {
        Some(path) => Some(load_context(path)?),
        None => None,
    };
    if base.is_none() && config.context_overrides.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        config.context_overrides.apply(base.unwrap_or_default()),
    ))
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let errors = config.app.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let quiet = config.app.behavior.quiet;
    let stage = config
        .stage
        .unwrap_or(config.app.assessment.default_stage);

    let engine = build_engine(&config.app.assessment, &config.app.prioritization)?;
    let responses = load_responses_with_context(&config.responses_path, quiet).map_err(|e| {
        PipelineError::LoadFailed {
            path: config.responses_path.display().to_string(),
            source: e,
        }
    })?;
    let context = resolve_context(&config)?;

    if !quiet {
        tracing::info!("Assessing against {} benchmarks", stage);
    }
    let result = engine
        .evaluate(&responses, stage, context.as_ref())
        .map_err(|e| PipelineError::AssessmentFailed { source: e.into() })?;

    for warning in &result.warnings {
        tracing::debug!("{}", warning);
    }

    let report_config = ReportConfig {
        max_recommendations: config.max_recommendations,
        include_actions: !config.hide_actions,
        metadata: ReportMetadata::new()
            .stamped()
            .with_responses_path(config.responses_path.display().to_string()),
        ..ReportConfig::default()
    };
    output_report(&config.app.output, &result, &report_config, quiet)
        .map_err(|e| PipelineError::ReportFailed { source: e })?;

    if let Some(threshold) = config.app.behavior.min_score
        && result.overall_score < threshold
    {
        tracing::error!(
            "Overall score {:.1} is below minimum threshold {:.1}",
            result.overall_score,
            threshold
        );
        return Ok(exit_codes::BELOW_THRESHOLD);
    }

    Ok(exit_codes::SUCCESS)
}
