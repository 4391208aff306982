//! Weight tables for the questionnaire signals.
//!
//! Two tables exist: the full one (used alongside voice and stroop
//! telemetry) and the reduced one, which weights the remaining signals more
//! heavily to cover the same 0-100 range without telemetry.

use crate::domain::assessment::{Scenario, ScenarioChoice};
use crate::domain::foundation::ScreeningVariant;

/// Points per answer, indexed A, B, C.
pub type ScenarioTable = [u32; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskWeights {
    /// Points for a "yes" on the nose or dream question.
    pub binary_symptom: u32,
    /// Points for money answers 1 to 5.
    pub money: [u32; 5],
    /// Points for a money value outside 1 to 5.
    pub money_fallback: u32,
    pub market: ScenarioTable,
    pub stove: ScenarioTable,
    pub scam: ScenarioTable,
    /// Whether voice and stroop sub-scores count.
    pub include_telemetry: bool,
}

impl RiskWeights {
    pub const FULL: RiskWeights = RiskWeights {
        binary_symptom: 12,
        money: [0, 4, 8, 12, 16],
        money_fallback: 8,
        market: [0, 6, 10],
        stove: [0, 6, 10],
        scam: [0, 4, 10],
        include_telemetry: true,
    };

    pub const REDUCED: RiskWeights = RiskWeights {
        binary_symptom: 15,
        money: [0, 5, 10, 15, 20],
        money_fallback: 10,
        market: [0, 8, 15],
        stove: [0, 8, 15],
        scam: [0, 5, 15],
        include_telemetry: false,
    };

    pub fn for_variant(variant: ScreeningVariant) -> Self {
        match variant {
            ScreeningVariant::Full => Self::FULL,
            ScreeningVariant::Reduced => Self::REDUCED,
        }
    }

    pub fn symptom_risk(&self, present: bool) -> u32 {
        if present {
            self.binary_symptom
        } else {
            0
        }
    }

    /// Looks up the raw 1-5 money answer.
    pub fn money_risk(&self, value: u8) -> u32 {
        match value {
            1..=5 => self.money[usize::from(value - 1)],
            _ => self.money_fallback,
        }
    }

    /// Unanswered scenarios score zero.
    pub fn scenario_risk(&self, scenario: Scenario, choice: Option<ScenarioChoice>) -> u32 {
        let table = match scenario {
            Scenario::Market => &self.market,
            Scenario::Stove => &self.stove,
            Scenario::Scam => &self.scam,
        };
        match choice {
            Some(ScenarioChoice::A) => table[0],
            Some(ScenarioChoice::B) => table[1],
            Some(ScenarioChoice::C) => table[2],
            None => 0,
        }
    }

    /// Highest total the questionnaire alone can reach.
    pub fn questionnaire_max(&self) -> u32 {
        let money_max = self.money.iter().copied().max().unwrap_or(0).max(self.money_fallback);
        let scenario_max: u32 = [self.market, self.stove, self.scam]
            .iter()
            .map(|t| t.iter().copied().max().unwrap_or(0))
            .sum();
        2 * self.binary_symptom + money_max + scenario_max
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self::FULL
    }
}
