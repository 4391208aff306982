//! UpdateAnswerHandler - Command handler for form-control updates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{
    AssessmentFlow, AssessmentStep, DemographicField, QuestionAnswer, Scenario, ScenarioChoice,
};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentStore;

use super::progress::save_progress;

/// One narrow update to the record.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAnswerCommand {
    Demographic { field: DemographicField, value: String },
    Question(QuestionAnswer),
    Scenario { scenario: Scenario, choice: ScenarioChoice },
    /// Manual transcript entry.
    ReplaceTranscript(String),
    /// A speech-recognition chunk.
    AppendTranscript(String),
}

/// Result of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAnswerResult {
    pub current_step: AssessmentStep,
    /// Whether the current step now allows moving forward.
    pub can_advance: bool,
}

/// Handler for answer updates.
pub struct UpdateAnswerHandler {
    store: Arc<dyn AssessmentStore>,
}

impl UpdateAnswerHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        flow: &mut AssessmentFlow,
        cmd: UpdateAnswerCommand,
    ) -> Result<UpdateAnswerResult, DomainError> {
        match cmd {
            UpdateAnswerCommand::Demographic { field, value } => {
                flow.update_demographic(field, &value)?;
                debug!(assessment_id = %flow.id(), field = field.name(), "Demographic updated");
            }
            UpdateAnswerCommand::Question(answer) => {
                flow.update_question(answer)?;
                debug!(assessment_id = %flow.id(), ?answer, "Question answered");
            }
            UpdateAnswerCommand::Scenario { scenario, choice } => {
                flow.update_scenario(scenario, choice)?;
                debug!(
                    assessment_id = %flow.id(),
                    scenario = scenario.name(),
                    %choice,
                    "Scenario answered"
                );
            }
            UpdateAnswerCommand::ReplaceTranscript(transcript) => {
                flow.replace_transcript(transcript)?;
                self.log_transcript(flow);
            }
            UpdateAnswerCommand::AppendTranscript(chunk) => {
                flow.append_transcript(&chunk)?;
                self.log_transcript(flow);
            }
        }

        save_progress(self.store.as_ref(), flow).await;

        Ok(UpdateAnswerResult {
            current_step: flow.current_step(),
            can_advance: flow.can_advance(),
        })
    }

    fn log_transcript(&self, flow: &AssessmentFlow) {
        if let Some(voice) = &flow.record().voice {
            debug!(
                assessment_id = %flow.id(),
                total_words = voice.total_words(),
                filler_count = voice.filler_count(),
                "Transcript updated"
            );
        }
    }
}
