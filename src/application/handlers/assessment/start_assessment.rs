//! StartAssessmentHandler - Command handler for beginning or resuming an assessment.
//!
//! With `resume` set, a stored in-progress snapshot of the configured variant
//! is restored. Anything else (no snapshot, a corrupted one, another variant,
//! or `resume` unset) starts a fresh flow, overwriting the stale snapshot.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::{AssessmentEvent, AssessmentFlow, FlowSnapshot};
use crate::domain::foundation::ScreeningVariant;
use crate::ports::AssessmentStore;

use super::progress::{drain_events, save_progress};

/// Command to start an assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartAssessmentCommand {
    /// Restore in-progress work if possible.
    pub resume: bool,
}

/// Result of starting an assessment.
#[derive(Debug)]
pub struct StartAssessmentResult {
    pub flow: AssessmentFlow,
    /// True if the flow was restored from a snapshot.
    pub resumed: bool,
    pub events: Vec<AssessmentEvent>,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    variant: ScreeningVariant,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, variant: ScreeningVariant) -> Self {
        Self { store, variant }
    }

    pub async fn handle(&self, cmd: StartAssessmentCommand) -> StartAssessmentResult {
        if cmd.resume {
            if let Some(flow) = self.try_resume().await {
                info!(
                    assessment_id = %flow.id(),
                    step = %flow.current_step(),
                    "Resumed assessment"
                );
                return StartAssessmentResult {
                    flow,
                    resumed: true,
                    events: Vec::new(),
                };
            }
        }

        let mut flow = AssessmentFlow::new(self.variant);
        save_progress(self.store.as_ref(), &flow).await;
        let events = drain_events(&mut flow);

        StartAssessmentResult {
            flow,
            resumed: false,
            events,
        }
    }

    async fn try_resume(&self) -> Option<AssessmentFlow> {
        let snapshot: FlowSnapshot = match self.store.load_current().await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable in-progress assessment");
                return None;
            }
        };

        if snapshot.variant != self.variant {
            info!(
                stored = %snapshot.variant,
                configured = %self.variant,
                "Stored assessment belongs to another variant; starting fresh"
            );
            return None;
        }

        match AssessmentFlow::restore(snapshot) {
            Ok(flow) => Some(flow),
            Err(err) => {
                warn!(error = %err, "Ignoring invalid in-progress assessment");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentStore;
    use crate::domain::assessment::{AssessmentStep, DemographicField, GameKind, GameResult};
    use crate::domain::foundation::Percentage;
    use crate::ports::CURRENT_ASSESSMENT_KEY;

    fn handler(store: &Arc<InMemoryAssessmentStore>, variant: ScreeningVariant) -> StartAssessmentHandler {
        StartAssessmentHandler::new(store.clone(), variant)
    }

    async fn stored_flow_at_voice(store: &InMemoryAssessmentStore) -> AssessmentFlow {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        flow.update_demographic(DemographicField::Age, "70").unwrap();
        flow.update_demographic(DemographicField::Occupation, "Nurse").unwrap();
        flow.update_demographic(DemographicField::Education, "bachelors").unwrap();
        flow.update_demographic(DemographicField::Location, "Leeds").unwrap();
        flow.update_demographic(DemographicField::Gender, "female").unwrap();
        flow.advance().unwrap();
        store.save_current(&flow.snapshot()).await.unwrap();
        flow
    }

    #[tokio::test]
    async fn fresh_start_persists_snapshot_and_emits_started() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let result = handler(&store, ScreeningVariant::Full)
            .handle(StartAssessmentCommand::default())
            .await;

        assert!(!result.resumed);
        assert_eq!(result.flow.current_step(), AssessmentStep::Demographics);
        assert!(matches!(result.events.as_slice(), [AssessmentEvent::Started { .. }]));

        let saved = store.load_current().await.unwrap().unwrap();
        assert_eq!(saved.assessment_id, result.flow.id());
    }

    #[tokio::test]
    async fn resume_restores_matching_snapshot() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let original = stored_flow_at_voice(&store).await;

        let result = handler(&store, ScreeningVariant::Full)
            .handle(StartAssessmentCommand { resume: true })
            .await;

        assert!(result.resumed);
        assert_eq!(result.flow.id(), original.id());
        assert_eq!(result.flow.current_step(), AssessmentStep::Voice);
        assert_eq!(result.flow.record(), original.record());
    }

    #[tokio::test]
    async fn without_resume_snapshot_is_overwritten() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let original = stored_flow_at_voice(&store).await;

        let result = handler(&store, ScreeningVariant::Full)
            .handle(StartAssessmentCommand { resume: false })
            .await;

        assert!(!result.resumed);
        assert_ne!(result.flow.id(), original.id());
        let saved = store.load_current().await.unwrap().unwrap();
        assert_eq!(saved.assessment_id, result.flow.id());
    }

    #[tokio::test]
    async fn resume_ignores_other_variant() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        stored_flow_at_voice(&store).await;

        let result = handler(&store, ScreeningVariant::Reduced)
            .handle(StartAssessmentCommand { resume: true })
            .await;

        assert!(!result.resumed);
        assert_eq!(result.flow.variant(), ScreeningVariant::Reduced);
    }

    #[tokio::test]
    async fn corrupted_snapshot_is_treated_as_absent() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        store.insert_raw(CURRENT_ASSESSMENT_KEY, "{\"broken\":").await;

        let result = handler(&store, ScreeningVariant::Full)
            .handle(StartAssessmentCommand { resume: true })
            .await;

        assert!(!result.resumed);
        // Fresh snapshot replaced the corrupted value.
        assert!(store.load_current().await.is_ok());
    }

    #[tokio::test]
    async fn snapshot_with_out_of_range_accuracy_starts_fresh() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let original = stored_flow_at_voice(&store).await;

        let game = GameResult {
            kind: GameKind::Stroop,
            trials: 12,
            accuracy: Percentage::new(80),
            average_reaction_ms: 700,
        };
        let mut value = serde_json::to_value(original.snapshot()).unwrap();
        value["record"]["game"] = serde_json::to_value(game).unwrap();
        value["record"]["game"]["accuracy"] = serde_json::json!(250);
        store
            .insert_raw(CURRENT_ASSESSMENT_KEY, value.to_string())
            .await;

        let result = handler(&store, ScreeningVariant::Full)
            .handle(StartAssessmentCommand { resume: true })
            .await;

        assert!(!result.resumed);
        assert_ne!(result.flow.id(), original.id());
        assert!(result.flow.record().game.is_none());
    }
}
