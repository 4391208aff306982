//! Assessment Store Port - Interface for key-scoped assessment persistence.
//!
//! Two fixed keys are used: one for the in-progress snapshot so a refresh can
//! resume, and one for the most recently completed record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentRecord, FlowSnapshot};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ScreeningVariant};

/// Key holding the in-progress snapshot. Distinct from the web client's
/// `triad_currentAgentData`, which stores a different shape.
pub const CURRENT_ASSESSMENT_KEY: &str = "triad_current_assessment";

/// Key holding the most recently completed assessment.
pub const LATEST_ASSESSMENT_KEY: &str = "triad_latest_assessment";

/// A finished assessment as stored for the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedAssessment {
    pub assessment_id: AssessmentId,
    pub variant: ScreeningVariant,
    pub record: AssessmentRecord,
}

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize {key}: {reason}")]
    SerializationFailed { key: &'static str, reason: String },

    #[error("Failed to deserialize {key}: {reason}")]
    DeserializationFailed { key: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting assessment state between sessions
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Overwrites the in-progress snapshot.
    async fn save_current(&self, snapshot: &FlowSnapshot) -> Result<(), StoreError>;

    /// Loads the in-progress snapshot, `None` if absent.
    ///
    /// # Errors
    /// Returns `StoreError::DeserializationFailed` if the stored data is
    /// corrupted. Callers treat that as "no prior state".
    async fn load_current(&self) -> Result<Option<FlowSnapshot>, StoreError>;

    /// Removes the in-progress snapshot. Absent is not an error.
    async fn clear_current(&self) -> Result<(), StoreError>;

    /// Overwrites the latest completed assessment.
    async fn save_latest(&self, completed: &CompletedAssessment) -> Result<(), StoreError>;

    /// Loads the latest completed assessment, `None` if absent.
    async fn load_latest(&self) -> Result<Option<CompletedAssessment>, StoreError>;
}
