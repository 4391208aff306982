//! FlowStatus enum for tracking the lifecycle of an assessment flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    #[default]
    InProgress,
    Completed,
}

impl FlowStatus {
    /// Returns true if answers may still be changed.
    pub fn is_mutable(&self) -> bool {
        matches!(self, FlowStatus::InProgress)
    }
}

impl StateMachine for FlowStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (FlowStatus::InProgress, FlowStatus::Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            FlowStatus::InProgress => vec![FlowStatus::Completed],
            FlowStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowStatus::InProgress => "In Progress",
            FlowStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
