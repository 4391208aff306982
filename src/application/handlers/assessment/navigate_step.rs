//! NavigateStepHandler - Command handler for moving through the wizard.
//!
//! Advancing past the final step completes the assessment: the record is
//! stored as the latest completed assessment, the in-progress snapshot is
//! cleared, and the scored report is returned.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::ScreeningReport;
use crate::domain::assessment::{AdvanceOutcome, AssessmentEvent, AssessmentFlow, AssessmentStep};
use crate::domain::foundation::DomainError;
use crate::ports::{AssessmentStore, CompletedAssessment};

use super::progress::{drain_events, save_progress};

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateStepCommand {
    Advance,
    Retreat,
}

/// Where the flow ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigateStepResult {
    Moved {
        step: AssessmentStep,
        progress_percent: u8,
        events: Vec<AssessmentEvent>,
    },
    Completed {
        completed: CompletedAssessment,
        report: ScreeningReport,
        events: Vec<AssessmentEvent>,
    },
}

/// Handler for step navigation.
pub struct NavigateStepHandler {
    store: Arc<dyn AssessmentStore>,
}

impl NavigateStepHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        flow: &mut AssessmentFlow,
        cmd: NavigateStepCommand,
    ) -> Result<NavigateStepResult, DomainError> {
        let outcome = match cmd {
            NavigateStepCommand::Advance => flow.advance()?,
            NavigateStepCommand::Retreat => AdvanceOutcome::Moved(flow.retreat()?),
        };

        match outcome {
            AdvanceOutcome::Moved(step) => {
                save_progress(self.store.as_ref(), flow).await;
                Ok(NavigateStepResult::Moved {
                    step,
                    progress_percent: flow.progress_percent(),
                    events: drain_events(flow),
                })
            }
            AdvanceOutcome::Completed(record) => {
                let completed = CompletedAssessment {
                    assessment_id: flow.id(),
                    variant: flow.variant(),
                    record,
                };
                self.persist_completion(&completed).await;

                let report = ScreeningReport::generate(&completed.record, completed.variant);
                info!(
                    assessment_id = %completed.assessment_id,
                    score = report.score.value(),
                    tier = %report.tier,
                    "Assessment scored"
                );

                Ok(NavigateStepResult::Completed {
                    completed,
                    report,
                    events: drain_events(flow),
                })
            }
        }
    }

    // The record is handed back even if storage fails.
    async fn persist_completion(&self, completed: &CompletedAssessment) {
        if let Err(err) = self.store.save_latest(completed).await {
            warn!(
                assessment_id = %completed.assessment_id,
                error = %err,
                "Failed to store completed assessment"
            );
        }
        if let Err(err) = self.store.clear_current().await {
            warn!(
                assessment_id = %completed.assessment_id,
                error = %err,
                "Failed to clear in-progress assessment"
            );
        }
    }
}
