//! Risk score and the tier it falls into.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Scores below this are LOW.
pub const MODERATE_THRESHOLD: u8 = 20;

/// Scores at or above this are HIGH.
pub const HIGH_THRESHOLD: u8 = 40;

/// Integer risk score, always within 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: RiskScore = RiskScore(100);

    /// Clamps into 0-100.
    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Rejects anything above 100.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "risk_score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(*self)
    }
}

impl TryFrom<u8> for RiskScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RiskScore::try_new(value)
    }
}

impl From<RiskScore> for u8 {
    fn from(value: RiskScore) -> Self {
        value.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tiered reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(score: RiskScore) -> Self {
        match score.value() {
            s if s < MODERATE_THRESHOLD => RiskTier::Low,
            s if s < HIGH_THRESHOLD => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
        }
    }

    /// Guidance shown with the result.
    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Your multi-agent screening shows normal patterns. Continue annual monitoring and maintain healthy lifestyle habits."
            }
            RiskTier::Moderate => {
                "Your screening indicates moderate risk factors. Consult with a healthcare provider for further evaluation and consider lifestyle interventions."
            }
            RiskTier::High => {
                "Your screening shows significant risk markers. We strongly recommend immediate consultation with a neurologist or memory specialist for comprehensive evaluation."
            }
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_to_hundred() {
        assert_eq!(RiskScore::new(250).value(), 100);
        assert_eq!(RiskScore::new(0).value(), 0);
    }

    #[test]
    fn stored_score_above_hundred_is_rejected() {
        assert_eq!(serde_json::from_str::<RiskScore>("100").unwrap(), RiskScore::MAX);
        assert!(serde_json::from_str::<RiskScore>("101").is_err());
        assert!(serde_json::from_str::<RiskScore>("250").is_err());
        assert!(RiskScore::try_new(101).is_err());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(RiskScore::new(0).tier(), RiskTier::Low);
        assert_eq!(RiskScore::new(19).tier(), RiskTier::Low);
        assert_eq!(RiskScore::new(20).tier(), RiskTier::Moderate);
        assert_eq!(RiskScore::new(39).tier(), RiskTier::Moderate);
        assert_eq!(RiskScore::new(40).tier(), RiskTier::High);
        assert_eq!(RiskScore::MAX.tier(), RiskTier::High);
    }

    #[test]
    fn tier_serializes_as_label() {
        let json = serde_json::to_string(&RiskTier::Moderate).unwrap();
        assert_eq!(json, "\"MODERATE\"");
    }

    #[test]
    fn each_tier_has_guidance() {
        assert!(RiskTier::Low.message().contains("normal patterns"));
        assert!(RiskTier::High.message().contains("neurologist"));
    }
}
