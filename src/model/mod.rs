//! Data model for engineering-practice assessments.
//!
//! Every assessment works on the same handful of value types:
//!
//! - [`Question`]: a scorable item tagged with category, weight and the
//!   stages it applies to.
//! - [`Response`] / [`ResponseSet`]: answers keyed by question id, owned by
//!   the caller.
//! - [`Recommendation`]: a static improvement action with impact, effort and
//!   optional score range or stage restriction.
//! - [`RecommendationContext`]: optional facts about the assessed repository
//!   used to adjust recommendation priority.
//!
//! All scores live on a 0-100 scale. Response values stay on their native
//! 1-4 scale until the aggregator converts them.

mod context;
mod question;
mod recommendation;
mod response;
mod stage;

pub use context::RecommendationContext;
pub use question::Question;
pub use recommendation::{Effort, Impact, Recommendation, ScoreRange};
pub use response::{MAX_RESPONSE_VALUE, MIN_RESPONSE_VALUE, Response, ResponseSet};
pub use stage::Stage;

/// Well-known category names used by the built-in catalogs.
pub mod categories {
    pub const SECURITY: &str = "security";
    pub const RELIABILITY: &str = "reliability";
    pub const MAINTAINABILITY: &str = "maintainability";
    pub const COLLABORATION: &str = "collaboration";
    pub const VELOCITY: &str = "velocity";
    pub const DOCUMENTATION: &str = "documentation";

    /// All built-in categories in presentation order
    pub const ALL: [&str; 6] = [
        SECURITY,
        RELIABILITY,
        MAINTAINABILITY,
        COLLABORATION,
        VELOCITY,
        DOCUMENTATION,
    ];
}

/// Upper bound of every normalized score
pub const MAX_SCORE: f64 = 100.0;

/// Largest question weight or category importance a catalog may declare.
///
/// Keeps weighted sums well inside `f64` range so scores stay finite.
pub const MAX_WEIGHT: f64 = 1e6;
