//! Startup maturity stages.

use crate::error::OctoflowError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maturity tier governing which questions apply and which benchmarks are used
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PreSeed,
    #[default]
    Seed,
    SeriesA,
    SeriesB,
}

impl Stage {
    /// Canonical kebab-case name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PreSeed => "pre-seed",
            Self::Seed => "seed",
            Self::SeriesA => "series-a",
            Self::SeriesB => "series-b",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PreSeed => "Pre-Seed",
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
        }
    }

    /// All stages, earliest first
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::PreSeed, Self::Seed, Self::SeriesA, Self::SeriesB]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = OctoflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "pre-seed" | "preseed" => Ok(Self::PreSeed),
            "seed" => Ok(Self::Seed),
            "series-a" | "seriesa" => Ok(Self::SeriesA),
            "series-b" | "seriesb" => Ok(Self::SeriesB),
            _ => Err(OctoflowError::unknown_stage(s)),
        }
    }
}
