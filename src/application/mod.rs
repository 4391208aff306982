//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    AnswerStroopCommand, AnswerStroopResult, GetLatestReportHandler, GetLatestReportQuery, LatestReport,
    NavigateStepCommand, NavigateStepHandler, NavigateStepResult, StartAssessmentCommand,
    StartAssessmentHandler, StartAssessmentResult, StartStroopCommand, StartStroopResult,
    StroopGameHandler, UpdateAnswerCommand, UpdateAnswerHandler, UpdateAnswerResult,
};
