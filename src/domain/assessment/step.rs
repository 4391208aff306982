//! AssessmentStep and StepSequence - centralized ordering for wizard steps.
//!
//! # Step Order
//!
//! Full variant:
//! 1. Demographics → 2. Voice → 3. Stroop → 4. Nose → 5. Dream → 6. Money →
//! 7. Market → 8. Stove → 9. Scam → 10. Complete
//!
//! The reduced variant drops Voice and Stroop and keeps the remaining order.
//!
//! # Usage
//!
//! ```ignore
//! let seq = StepSequence::for_variant(ScreeningVariant::Full);
//! assert_eq!(seq.next(AssessmentStep::Demographics), Some(AssessmentStep::Voice));
//! assert_eq!(seq.previous(AssessmentStep::Demographics), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ScreeningVariant;

/// One stage of the assessment wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    Demographics,
    Voice,
    Stroop,
    Nose,
    Dream,
    Money,
    Market,
    Stove,
    Scam,
    Complete,
}

impl AssessmentStep {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AssessmentStep::Demographics => "Demographics",
            AssessmentStep::Voice => "Voice Sample",
            AssessmentStep::Stroop => "Stroop Test",
            AssessmentStep::Nose => "Sense of Smell",
            AssessmentStep::Dream => "Sleep Behaviour",
            AssessmentStep::Money => "Money Handling",
            AssessmentStep::Market => "Market Scenario",
            AssessmentStep::Stove => "Stove Scenario",
            AssessmentStep::Scam => "Scam Scenario",
            AssessmentStep::Complete => "Complete",
        }
    }
}

impl fmt::Display for AssessmentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const FULL_ORDER: [AssessmentStep; 10] = [
    AssessmentStep::Demographics,
    AssessmentStep::Voice,
    AssessmentStep::Stroop,
    AssessmentStep::Nose,
    AssessmentStep::Dream,
    AssessmentStep::Money,
    AssessmentStep::Market,
    AssessmentStep::Stove,
    AssessmentStep::Scam,
    AssessmentStep::Complete,
];

const REDUCED_ORDER: [AssessmentStep; 8] = [
    AssessmentStep::Demographics,
    AssessmentStep::Nose,
    AssessmentStep::Dream,
    AssessmentStep::Money,
    AssessmentStep::Market,
    AssessmentStep::Stove,
    AssessmentStep::Scam,
    AssessmentStep::Complete,
];

/// Ordered step list for one screening variant.
///
/// All ordering questions go through this type so the flow never hardcodes
/// neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequence {
    steps: &'static [AssessmentStep],
}

impl StepSequence {
    /// Returns the sequence for a variant.
    pub fn for_variant(variant: ScreeningVariant) -> Self {
        let steps: &'static [AssessmentStep] = match variant {
            ScreeningVariant::Full => &FULL_ORDER,
            ScreeningVariant::Reduced => &REDUCED_ORDER,
        };
        Self { steps }
    }

    /// Returns all steps in order.
    pub fn all(&self) -> &'static [AssessmentStep] {
        self.steps
    }

    /// Returns the initial step.
    pub fn first(&self) -> AssessmentStep {
        self.steps[0]
    }

    /// Returns the terminal step.
    pub fn last(&self) -> AssessmentStep {
        self.steps[self.steps.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns true if the step belongs to this sequence.
    pub fn contains(&self, step: AssessmentStep) -> bool {
        self.steps.contains(&step)
    }

    /// Returns the 0-based index of a step, or None if the variant skips it.
    pub fn order_index(&self, step: AssessmentStep) -> Option<usize> {
        self.steps.iter().position(|&s| s == step)
    }

    /// Returns the next step, or None at the end (or for a foreign step).
    pub fn next(&self, step: AssessmentStep) -> Option<AssessmentStep> {
        let idx = self.order_index(step)?;
        self.steps.get(idx + 1).copied()
    }

    /// Returns the previous step, or None at the start (or for a foreign step).
    pub fn previous(&self, step: AssessmentStep) -> Option<AssessmentStep> {
        let idx = self.order_index(step)?;
        idx.checked_sub(1).and_then(|i| self.steps.get(i).copied())
    }

    /// Progress through the wizard as `round((index + 1) / len * 100)`.
    pub fn progress_percent(&self, step: AssessmentStep) -> u8 {
        match self.order_index(step) {
            Some(idx) => (((idx + 1) as f64 / self.steps.len() as f64) * 100.0).round() as u8,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> StepSequence {
        StepSequence::for_variant(ScreeningVariant::Full)
    }

    fn reduced() -> StepSequence {
        StepSequence::for_variant(ScreeningVariant::Reduced)
    }

    #[test]
    fn full_sequence_has_ten_steps_in_order() {
        let all = full().all();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], AssessmentStep::Demographics);
        assert_eq!(all[1], AssessmentStep::Voice);
        assert_eq!(all[2], AssessmentStep::Stroop);
        assert_eq!(all[9], AssessmentStep::Complete);
    }

    #[test]
    fn reduced_sequence_skips_telemetry() {
        let seq = reduced();
        assert_eq!(seq.len(), 8);
        assert!(!seq.contains(AssessmentStep::Voice));
        assert!(!seq.contains(AssessmentStep::Stroop));
        assert_eq!(seq.next(AssessmentStep::Demographics), Some(AssessmentStep::Nose));
    }

    #[test]
    fn next_and_previous_walk_the_sequence() {
        let seq = full();
        assert_eq!(seq.next(AssessmentStep::Money), Some(AssessmentStep::Market));
        assert_eq!(seq.previous(AssessmentStep::Market), Some(AssessmentStep::Money));
        assert_eq!(seq.next(AssessmentStep::Complete), None);
        assert_eq!(seq.previous(AssessmentStep::Demographics), None);
    }

    #[test]
    fn foreign_steps_have_no_neighbours() {
        let seq = reduced();
        assert_eq!(seq.order_index(AssessmentStep::Voice), None);
        assert_eq!(seq.next(AssessmentStep::Stroop), None);
        assert_eq!(seq.progress_percent(AssessmentStep::Voice), 0);
    }

    #[test]
    fn first_and_last() {
        assert_eq!(full().first(), AssessmentStep::Demographics);
        assert_eq!(reduced().last(), AssessmentStep::Complete);
    }

    #[test]
    fn progress_percent_counts_current_step() {
        let seq = full();
        assert_eq!(seq.progress_percent(AssessmentStep::Demographics), 10);
        assert_eq!(seq.progress_percent(AssessmentStep::Complete), 100);
        // 2 of 8
        assert_eq!(reduced().progress_percent(AssessmentStep::Nose), 25);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&AssessmentStep::Demographics).unwrap();
        assert_eq!(json, "\"demographics\"");
        let step: AssessmentStep = serde_json::from_str("\"stroop\"").unwrap();
        assert_eq!(step, AssessmentStep::Stroop);
    }
}
