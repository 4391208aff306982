//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the screening domain.

mod errors;
mod flow_status;
mod ids;
mod likert;
mod percentage;
mod state_machine;
mod timestamp;
mod variant;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use flow_status::FlowStatus;
pub use ids::AssessmentId;
pub use likert::Likert;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use variant::ScreeningVariant;
