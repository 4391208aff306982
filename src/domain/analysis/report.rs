//! Screening report shown on the results view.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{ScreeningVariant, Timestamp};

use super::{RiskBreakdown, RiskScore, RiskScorer, RiskTier};

/// Scored result of a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    pub variant: ScreeningVariant,
    pub score: RiskScore,
    pub tier: RiskTier,
    pub breakdown: RiskBreakdown,
    pub message: String,
    /// `None` if the record was scored before completion.
    pub completed_at: Option<Timestamp>,
}

impl ScreeningReport {
    /// Scores `record` with the weights of `variant`.
    pub fn generate(record: &AssessmentRecord, variant: ScreeningVariant) -> Self {
        let breakdown = RiskScorer::new(variant).breakdown(record);
        let score = breakdown.total();
        let tier = score.tier();

        Self {
            variant,
            score,
            tier,
            breakdown,
            message: tier.message().to_string(),
            completed_at: record.timestamp,
        }
    }

    /// e.g. "36/100 (MODERATE)"
    pub fn headline(&self) -> String {
        format!("{}/100 ({})", self.score, self.tier)
    }
}
