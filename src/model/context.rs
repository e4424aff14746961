//! Optional repository context for recommendation prioritization.

use serde::{Deserialize, Serialize};

/// Facts about the assessed repository.
///
/// Every field is optional; missing facts simply leave the related
/// priority multiplier unapplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationContext {
    /// Repository is publicly visible
    pub is_public: bool,
    /// Repository size in kilobytes, as reported by the hosting platform
    pub repository_size_kb: Option<u64>,
    /// Pull requests opened in the recent activity window
    pub recent_pr_count: Option<u32>,
    /// Repository has continuous integration configured
    pub has_ci: bool,
}

impl RecommendationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    #[must_use]
    pub const fn with_size_kb(mut self, size_kb: u64) -> Self {
        self.repository_size_kb = Some(size_kb);
        self
    }

    #[must_use]
    pub const fn with_recent_prs(mut self, count: u32) -> Self {
        self.recent_pr_count = Some(count);
        self
    }

    #[must_use]
    pub const fn with_ci(mut self, has_ci: bool) -> Self {
        self.has_ci = has_ci;
        self
    }
}
