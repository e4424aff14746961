//! Priority ordering for selected recommendations.

use crate::model::categories::{COLLABORATION, MAINTAINABILITY, RELIABILITY, SECURITY};
use crate::model::{Recommendation, RecommendationContext};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Context multipliers and the thresholds that trigger them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PrioritizationConfig {
    /// Security items in public repositories
    pub public_security_boost: f64,
    /// Maintainability items in small repositories
    pub small_repo_maintainability_boost: f64,
    /// Collaboration items under high pull-request volume
    pub high_pr_volume_collaboration_boost: f64,
    /// Reliability items when CI already exists
    pub ci_reliability_boost: f64,
    /// Items that can be automated
    pub automatable_boost: f64,
    /// Repositories strictly below this size (KB) count as small
    pub small_repo_max_kb: u64,
    /// This many recent pull requests or more counts as high volume
    pub high_pr_volume_min: u32,
}

impl Default for PrioritizationConfig {
    fn default() -> Self {
        Self {
            public_security_boost: 2.0,
            small_repo_maintainability_boost: 1.5,
            high_pr_volume_collaboration_boost: 1.3,
            ci_reliability_boost: 1.2,
            automatable_boost: 1.5,
            small_repo_max_kb: 5_000,
            high_pr_volume_min: 10,
        }
    }
}

/// Orders recommendations by descending priority
#[derive(Debug, Clone, Default)]
pub struct Prioritizer {
    config: PrioritizationConfig,
}

impl Prioritizer {
    #[must_use]
    pub const fn new(config: PrioritizationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PrioritizationConfig {
        &self.config
    }

    /// Priority of one recommendation.
    ///
    /// `impact * inverted effort`, multiplied by every context boost that
    /// applies. Without context the base score is returned unchanged.
    #[must_use]
    pub fn priority(&self, rec: &Recommendation, context: Option<&RecommendationContext>) -> f64 {
        let base = rec.base_priority();
        let Some(ctx) = context else {
            return base;
        };

        let cfg = &self.config;
        let category = rec.category.as_str();
        let mut multiplier = 1.0;

        if ctx.is_public && category == SECURITY {
            multiplier *= cfg.public_security_boost;
        }
        if category == MAINTAINABILITY
            && ctx
                .repository_size_kb
                .is_some_and(|kb| kb < cfg.small_repo_max_kb)
        {
            multiplier *= cfg.small_repo_maintainability_boost;
        }
        if category == COLLABORATION
            && ctx
                .recent_pr_count
                .is_some_and(|prs| prs >= cfg.high_pr_volume_min)
        {
            multiplier *= cfg.high_pr_volume_collaboration_boost;
        }
        if ctx.has_ci && category == RELIABILITY {
            multiplier *= cfg.ci_reliability_boost;
        }
        if rec.automatable {
            multiplier *= cfg.automatable_boost;
        }

        base * multiplier
    }

    /// Sort by descending priority.
    ///
    /// The sort is stable: equal priorities keep their input order, so the
    /// output is deterministic for identical inputs.
    #[must_use]
    pub fn prioritize(
        &self,
        recommendations: Vec<Recommendation>,
        context: Option<&RecommendationContext>,
    ) -> Vec<Recommendation> {
        let mut scored: Vec<(f64, Recommendation)> = recommendations
            .into_iter()
            .map(|rec| (self.priority(&rec, context), rec))
            .collect();
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        scored.into_iter().map(|(_, rec)| rec).collect()
    }
}

/// High-impact, low-effort subset, in the order given
#[must_use]
pub fn quick_wins(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|r| r.is_quick_win())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Effort, Impact};

    fn rec(id: &str, category: &str, impact: Impact, effort: Effort) -> Recommendation {
        Recommendation::new(id, category, id, impact, effort)
    }

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_quick_win_sorts_before_high_effort() {
        let r2 = rec("r2", "security", Impact::High, Effort::High);
        let r1 = rec("r1", "security", Impact::High, Effort::Low);
        let sorted = Prioritizer::default().prioritize(vec![r2, r1], None);
        assert_eq!(ids(&sorted), vec!["r1", "r2"]);

        let wins = quick_wins(&sorted);
        assert_eq!(ids(&wins), vec!["r1"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = rec("a", "security", Impact::Medium, Effort::Medium);
        let b = rec("b", "velocity", Impact::Medium, Effort::Medium);
        let c = rec("c", "reliability", Impact::High, Effort::High);
        let sorted = Prioritizer::default().prioritize(vec![a, b, c], None);
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_without_context_automatable_is_not_boosted() {
        let plain = rec("plain", "velocity", Impact::Medium, Effort::Low);
        let auto = rec("auto", "velocity", Impact::Medium, Effort::Low).automatable();
        let p = Prioritizer::default();
        assert_eq!(p.priority(&plain, None), p.priority(&auto, None));
    }

    #[test]
    fn test_public_repository_boosts_security() {
        let sec = rec("sec", "security", Impact::Medium, Effort::Medium);
        let vel = rec("vel", "velocity", Impact::High, Effort::Medium);
        let p = Prioritizer::default();

        let sorted = p.prioritize(vec![vel.clone(), sec.clone()], None);
        assert_eq!(ids(&sorted), vec!["vel", "sec"]);

        let ctx = RecommendationContext::new().public(true);
        assert_eq!(p.priority(&sec, Some(&ctx)), 8.0);
        let sorted = p.prioritize(vec![vel, sec], Some(&ctx));
        assert_eq!(ids(&sorted), vec!["sec", "vel"]);
    }

    #[test]
    fn test_context_multipliers_compose() {
        let p = Prioritizer::default();
        let ctx = RecommendationContext::new()
            .with_size_kb(1_200)
            .with_recent_prs(25)
            .with_ci(true);

        let mnt = rec("mnt", "maintainability", Impact::Medium, Effort::Medium).automatable();
        assert!((p.priority(&mnt, Some(&ctx)) - 4.0 * 1.5 * 1.5).abs() < 1e-9);

        let col = rec("col", "collaboration", Impact::Low, Effort::Low);
        assert!((p.priority(&col, Some(&ctx)) - 3.0 * 1.3).abs() < 1e-9);

        let rel = rec("rel", "reliability", Impact::High, Effort::High);
        assert!((p.priority(&rel, Some(&ctx)) - 3.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_thresholds_are_respected() {
        let p = Prioritizer::default();
        let mnt = rec("mnt", "maintainability", Impact::Low, Effort::High);
        let big = RecommendationContext::new().with_size_kb(5_000);
        assert_eq!(p.priority(&mnt, Some(&big)), 1.0);

        let col = rec("col", "collaboration", Impact::Low, Effort::High);
        let quiet = RecommendationContext::new().with_recent_prs(9);
        assert_eq!(p.priority(&col, Some(&quiet)), 1.0);
    }

    #[test]
    fn test_custom_config() {
        let p = Prioritizer::new(PrioritizationConfig {
            public_security_boost: 3.0,
            ..PrioritizationConfig::default()
        });
        let sec = rec("sec", "security", Impact::Low, Effort::High);
        let ctx = RecommendationContext::new().public(true);
        assert_eq!(p.priority(&sec, Some(&ctx)), 3.0);
    }
}
