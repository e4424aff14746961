//! Pipeline orchestration for assessments.
//!
//! Shared load → evaluate → report logic used by the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{build_engine, load_context, load_responses_with_context};
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Scoring could not run (unknown stage, missing benchmarks)
    #[error("Assessment failed: {source}")]
    AssessmentFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI integration
pub mod exit_codes {
    /// Success, or no threshold configured
    pub const SUCCESS: i32 = 0;
    /// Overall score is below the configured minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
