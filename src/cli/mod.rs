//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements
//! the logic for one subcommand and returns the process exit code.

mod assess;
mod catalog;

pub use assess::{AssessConfig, ContextOverrides, run_assess};
pub use catalog::{CatalogListing, run_benchmarks, run_questions};

// Re-export config types used by handlers
pub use crate::config::AppConfig;
