//! Recommendation selection and ordering.
//!
//! [`generate`] picks candidate actions from the catalog based on category
//! scores; [`Prioritizer`] orders them by impact, effort and optional
//! repository context; [`quick_wins`] extracts the high-impact, low-effort
//! subset.

mod generator;
mod prioritizer;

pub use generator::generate;
pub use prioritizer::{PrioritizationConfig, Prioritizer, quick_wins};
