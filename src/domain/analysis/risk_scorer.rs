//! Risk Scorer - maps a completed record to a 0-100 risk score.
//!
//! Every signal produces an independently bounded sub-score; the total is
//! their sum, clamped. Missing telemetry contributes nothing, and an
//! unparseable age falls back to [`DEFAULT_AGE`]. Scoring never fails.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentRecord, GameResult, Scenario, TranscriptAnalysis};
use crate::domain::foundation::ScreeningVariant;

use super::{EducationTier, RiskScore, RiskWeights, DEFAULT_AGE};

/// Upper bound of the voice sub-score.
pub const MAX_VOICE_RISK: u32 = 20;

/// Upper bound of the stroop sub-score.
pub const MAX_STROOP_RISK: u32 = 30;

/// Richness shortfall that earns the full richness penalty.
const RICHNESS_DEFICIT_SPAN: f64 = 0.18;
/// Filler ratio tolerated before hesitation is penalised.
const HESITATION_TOLERANCE: f64 = 0.06;
const HESITATION_EXCESS_SPAN: f64 = 0.12;
const RICHNESS_POINTS: f64 = 10.0;
const HESITATION_POINTS: f64 = 10.0;

const ACCURACY_DEFICIT_SPAN: f64 = 20.0;
const REACTION_PENALTY_SPAN_MS: f64 = 450.0;
const ACCURACY_POINTS: f64 = 12.0;
const REACTION_POINTS: f64 = 18.0;

/// Per-signal contributions to a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub voice: u32,
    pub stroop: u32,
    pub nose: u32,
    pub dream: u32,
    pub money: u32,
    pub market: u32,
    pub stove: u32,
    pub scam: u32,
}

impl RiskBreakdown {
    /// Sum of all parts before clamping.
    pub fn raw_total(&self) -> u32 {
        self.voice
            + self.stroop
            + self.nose
            + self.dream
            + self.money
            + self.market
            + self.stove
            + self.scam
    }

    pub fn total(&self) -> RiskScore {
        RiskScore::new(self.raw_total())
    }
}

/// Stateless scorer configured with one weight table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    weights: RiskWeights,
}

impl RiskScorer {
    pub fn new(variant: ScreeningVariant) -> Self {
        Self::with_weights(RiskWeights::for_variant(variant))
    }

    pub fn with_weights(weights: RiskWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RiskWeights {
        &self.weights
    }

    /// Scores a record.
    pub fn score(&self, record: &AssessmentRecord) -> RiskScore {
        self.breakdown(record).total()
    }

    /// Computes every sub-score.
    pub fn breakdown(&self, record: &AssessmentRecord) -> RiskBreakdown {
        let w = &self.weights;
        let tier = EducationTier::from_education(record.demographics.education);

        let (voice, stroop) = if w.include_telemetry {
            let age = record.demographics.parsed_age().unwrap_or(DEFAULT_AGE);
            (
                record
                    .voice
                    .as_ref()
                    .map(|v| voice_risk(v.analysis(), tier))
                    .unwrap_or(0),
                record
                    .completed_game()
                    .map(|g| stroop_risk(g, age, tier))
                    .unwrap_or(0),
            )
        } else {
            (0, 0)
        };

        let scenarios = &record.scenarios;
        RiskBreakdown {
            voice,
            stroop,
            nose: w.symptom_risk(record.questions.nose),
            dream: w.symptom_risk(record.questions.dream),
            money: w.money_risk(record.questions.money.value()),
            market: w.scenario_risk(Scenario::Market, scenarios.market),
            stove: w.scenario_risk(Scenario::Stove, scenarios.stove),
            scam: w.scenario_risk(Scenario::Scam, scenarios.scam),
        }
    }
}

/// Vocabulary and hesitation sub-score, 0 to [`MAX_VOICE_RISK`].
pub fn voice_risk(analysis: &TranscriptAnalysis, tier: EducationTier) -> u32 {
    let richness_deficit =
        ((tier.expected_richness() - analysis.vocabulary_richness) / RICHNESS_DEFICIT_SPAN)
            .clamp(0.0, 1.0);
    let richness_risk = points(richness_deficit, RICHNESS_POINTS);

    let hesitation_excess =
        ((analysis.hesitation_rate - HESITATION_TOLERANCE) / HESITATION_EXCESS_SPAN).clamp(0.0, 1.0);
    let hesitation_risk = points(hesitation_excess, HESITATION_POINTS);

    (richness_risk + hesitation_risk).min(MAX_VOICE_RISK)
}

/// Accuracy and reaction-time sub-score, 0 to [`MAX_STROOP_RISK`].
/// Zero for a game with no trials.
pub fn stroop_risk(game: &GameResult, age: i64, tier: EducationTier) -> u32 {
    if !game.is_completed() {
        return 0;
    }

    let accuracy = f64::from(game.accuracy.value());
    let accuracy_deficit =
        ((tier.expected_accuracy() - accuracy) / ACCURACY_DEFICIT_SPAN).clamp(0.0, 1.0);
    let accuracy_risk = points(accuracy_deficit, ACCURACY_POINTS);

    let delta_ms = f64::from(game.average_reaction_ms) - tier.expected_reaction_ms(age);
    let reaction_penalty = (delta_ms / REACTION_PENALTY_SPAN_MS).clamp(0.0, 1.0);
    let reaction_risk = points(reaction_penalty, REACTION_POINTS);

    (accuracy_risk + reaction_risk).min(MAX_STROOP_RISK)
}

// `fraction` is already clamped to 0..=1.
fn points(fraction: f64, max: f64) -> u32 {
    (fraction * max).round() as u32
}
