//! Assessment command and query handlers.
//!
//! Handlers take the flow by mutable reference (the presentation layer owns
//! it) and persist the in-progress snapshot after every accepted change.

mod progress;

// Command handlers
mod navigate_step;
mod start_assessment;
mod stroop_game;
mod update_answer;

// Query handlers
mod get_latest_report;

pub use get_latest_report::{GetLatestReportHandler, GetLatestReportQuery, LatestReport};
pub use navigate_step::{NavigateStepCommand, NavigateStepHandler, NavigateStepResult};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
pub use stroop_game::{
    AnswerStroopCommand, AnswerStroopResult, StartStroopCommand, StartStroopResult,
    StroopGameHandler,
};
pub use update_answer::{UpdateAnswerCommand, UpdateAnswerHandler, UpdateAnswerResult};
