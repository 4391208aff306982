//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AnswerStroopCommand, AnswerStroopResult, GetLatestReportHandler, GetLatestReportQuery, LatestReport,
    NavigateStepCommand, NavigateStepHandler, NavigateStepResult, StartAssessmentCommand,
    StartAssessmentHandler, StartAssessmentResult, StartStroopCommand, StartStroopResult,
    StroopGameHandler, UpdateAnswerCommand, UpdateAnswerHandler, UpdateAnswerResult,
};
