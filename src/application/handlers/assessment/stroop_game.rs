//! StroopGameHandler - Command handler for the reaction-time game.
//!
//! The random source is owned by the handler so tests can seed it. The
//! caller supplies the instant of each screen event.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::assessment::{AssessmentEvent, AssessmentFlow, Ink, StroopProgress, StroopTrial};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentStore;

use super::progress::{drain_events, save_progress};

/// Command to start (or retake) the game.
#[derive(Debug, Clone, Copy)]
pub struct StartStroopCommand {
    /// When the first trial was shown.
    pub at: Instant,
}

/// Command to answer the trial on screen.
#[derive(Debug, Clone, Copy)]
pub struct AnswerStroopCommand {
    pub answer: Ink,
    /// When the answer was given.
    pub at: Instant,
}

/// Result of starting the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartStroopResult {
    pub trial: StroopTrial,
    pub total_trials: u32,
}

/// Result of answering one trial.
#[derive(Debug, Clone)]
pub struct AnswerStroopResult {
    pub progress: StroopProgress,
    /// `StroopCompleted` once the last trial is answered, otherwise empty.
    pub events: Vec<AssessmentEvent>,
}

/// Handler for the stroop game.
pub struct StroopGameHandler<R = StdRng> {
    store: Arc<dyn AssessmentStore>,
    rng: Mutex<R>,
}

impl StroopGameHandler<StdRng> {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }
}

impl<R: Rng + Send> StroopGameHandler<R> {
    pub fn with_rng(store: Arc<dyn AssessmentStore>, rng: R) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    pub async fn start(
        &self,
        flow: &mut AssessmentFlow,
        cmd: StartStroopCommand,
    ) -> Result<StartStroopResult, DomainError> {
        let trial = {
            let mut rng = self.rng.lock().await;
            flow.start_stroop(&mut *rng, cmd.at)?
        };
        let total_trials = flow.stroop_trial_count();
        debug!(assessment_id = %flow.id(), total_trials, "Stroop game started");

        // A retake clears the previous result, so the snapshot changes.
        save_progress(self.store.as_ref(), flow).await;

        Ok(StartStroopResult {
            trial,
            total_trials,
        })
    }

    pub async fn answer(
        &self,
        flow: &mut AssessmentFlow,
        cmd: AnswerStroopCommand,
    ) -> Result<AnswerStroopResult, DomainError> {
        let progress = {
            let mut rng = self.rng.lock().await;
            flow.answer_stroop(cmd.answer, &mut *rng, cmd.at)?
        };

        let mut events = Vec::new();
        if let StroopProgress::Finished(_) = progress {
            events = drain_events(flow);
            save_progress(self.store.as_ref(), flow).await;
        }

        Ok(AnswerStroopResult { progress, events })
    }
}
