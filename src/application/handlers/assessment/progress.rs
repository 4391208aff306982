//! Shared steps run after every flow mutation.

use tracing::{debug, info, warn};

use crate::domain::assessment::{AssessmentEvent, AssessmentFlow};
use crate::ports::AssessmentStore;

/// Writes the in-progress snapshot. A failed write is logged and otherwise
/// ignored; the flow in memory stays authoritative.
pub(super) async fn save_progress(store: &dyn AssessmentStore, flow: &AssessmentFlow) {
    if let Err(err) = store.save_current(&flow.snapshot()).await {
        warn!(
            assessment_id = %flow.id(),
            error = %err,
            "Failed to persist assessment progress"
        );
    }
}

/// Drains and logs the events the flow recorded.
pub(super) fn drain_events(flow: &mut AssessmentFlow) -> Vec<AssessmentEvent> {
    let events = flow.take_events();
    for event in &events {
        match event {
            AssessmentEvent::Started { assessment_id, variant, .. } => {
                info!(%assessment_id, %variant, event = event.event_type(), "Assessment started");
            }
            AssessmentEvent::Completed { assessment_id, .. } => {
                info!(%assessment_id, event = event.event_type(), "Assessment completed");
            }
            AssessmentEvent::Advanced { assessment_id, from, to }
            | AssessmentEvent::Retreated { assessment_id, from, to } => {
                debug!(%assessment_id, %from, %to, event = event.event_type(), "Step changed");
            }
            AssessmentEvent::StroopCompleted { assessment_id, result } => {
                debug!(
                    %assessment_id,
                    trials = result.trials,
                    accuracy = result.accuracy.value(),
                    average_reaction_ms = result.average_reaction_ms,
                    event = event.event_type(),
                    "Stroop run finished"
                );
            }
        }
    }
    events
}
