//! Assessment domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, ScreeningVariant, Timestamp};

use super::{AssessmentStep, GameResult};

/// Events that can occur during an assessment's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssessmentEvent {
    /// A new assessment was started.
    Started {
        assessment_id: AssessmentId,
        variant: ScreeningVariant,
        started_at: Timestamp,
    },

    /// The participant moved forward past a satisfied step.
    Advanced {
        assessment_id: AssessmentId,
        from: AssessmentStep,
        to: AssessmentStep,
    },

    /// The participant stepped back.
    Retreated {
        assessment_id: AssessmentId,
        from: AssessmentStep,
        to: AssessmentStep,
    },

    /// A stroop run finished.
    StroopCompleted {
        assessment_id: AssessmentId,
        result: GameResult,
    },

    /// The record was finalized and handed off.
    Completed {
        assessment_id: AssessmentId,
        completed_at: Timestamp,
    },
}

impl AssessmentEvent {
    /// Stable event name for logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            AssessmentEvent::Started { .. } => "assessment.started.v1",
            AssessmentEvent::Advanced { .. } => "assessment.advanced.v1",
            AssessmentEvent::Retreated { .. } => "assessment.retreated.v1",
            AssessmentEvent::StroopCompleted { .. } => "assessment.stroop_completed.v1",
            AssessmentEvent::Completed { .. } => "assessment.completed.v1",
        }
    }
}
