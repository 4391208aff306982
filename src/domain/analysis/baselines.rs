//! Education-tier baselines for the telemetry heuristics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::Education;

/// Age used when the demographics age cannot be parsed.
pub const DEFAULT_AGE: i64 = 50;

/// Reaction-time baseline for a 20-year-old in the `other` tier.
pub const BASE_REACTION_MS: f64 = 650.0;

/// Slowdown applied per decade above 20.
pub const REACTION_MS_PER_DECADE: f64 = 8.0;

/// Four-bucket education classification.
///
/// High school, some college, other and unanswered all collapse to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Doctorate,
    Masters,
    Bachelors,
    Other,
}

impl EducationTier {
    pub fn from_education(education: Option<Education>) -> Self {
        match education {
            Some(Education::Doctorate) => EducationTier::Doctorate,
            Some(Education::Masters) => EducationTier::Masters,
            Some(Education::Bachelors) => EducationTier::Bachelors,
            _ => EducationTier::Other,
        }
    }

    /// Expected unique/total word ratio in free speech.
    pub fn expected_richness(&self) -> f64 {
        match self {
            EducationTier::Doctorate => 0.45,
            EducationTier::Masters => 0.42,
            EducationTier::Bachelors => 0.40,
            EducationTier::Other => 0.35,
        }
    }

    /// Expected stroop accuracy, in percent.
    pub fn expected_accuracy(&self) -> f64 {
        match self {
            EducationTier::Doctorate => 92.0,
            EducationTier::Masters => 90.0,
            EducationTier::Bachelors => 88.0,
            EducationTier::Other => 85.0,
        }
    }

    /// Cognitive-reserve offset applied to the reaction baseline.
    pub fn reaction_adjustment_ms(&self) -> f64 {
        match self {
            EducationTier::Doctorate => -75.0,
            EducationTier::Masters => -50.0,
            EducationTier::Bachelors => -25.0,
            EducationTier::Other => 0.0,
        }
    }

    /// Number of stroop trials requested from this tier.
    pub fn stroop_trials(&self) -> u32 {
        match self {
            EducationTier::Doctorate => 16,
            EducationTier::Masters => 14,
            EducationTier::Bachelors | EducationTier::Other => 12,
        }
    }

    /// Expected average reaction time for a participant of `age`.
    pub fn expected_reaction_ms(&self, age: i64) -> f64 {
        let age_adjustment = ((age as f64 - 20.0) / 10.0) * REACTION_MS_PER_DECADE;
        BASE_REACTION_MS + age_adjustment + self.reaction_adjustment_ms()
    }
}

impl fmt::Display for EducationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EducationTier::Doctorate => "doctorate",
            EducationTier::Masters => "masters",
            EducationTier::Bachelors => "bachelors",
            EducationTier::Other => "other",
        };
        f.write_str(s)
    }
}
