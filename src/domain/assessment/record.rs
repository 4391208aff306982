//! AssessmentRecord - the aggregate of every answer, filled step by step.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{Demographics, GameResult, Questions, Scenarios, VoiceSample};

/// Everything the participant entered, plus the completion time.
///
/// `voice` and `game` stay `None` until the corresponding step produces a
/// signal (and always in the reduced variant).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub demographics: Demographics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceSample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameResult>,
    #[serde(default)]
    pub questions: Questions,
    #[serde(default)]
    pub scenarios: Scenarios,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl AssessmentRecord {
    /// An empty record, as created when a new assessment begins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the completion timestamp has been set.
    pub fn is_finished(&self) -> bool {
        self.timestamp.is_some()
    }

    /// A completed stroop run, if any.
    pub fn completed_game(&self) -> Option<&GameResult> {
        self.game.as_ref().filter(|g| g.is_completed())
    }
}
