//! AssessmentFlow aggregate - drives the participant through the wizard.
//!
//! The flow owns the [`AssessmentRecord`] for its whole lifetime. Each step
//! has a narrow mutator that only touches its own part of the record, and
//! forward movement is gated on a per-step completeness check. Advancing from
//! the `Complete` step stamps the record and hands it back exactly once.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::EducationTier;
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, FlowStatus, ScreeningVariant, StateMachine, Timestamp,
};

use super::{
    AssessmentEvent, AssessmentRecord, AssessmentStep, DemographicField, Ink, QuestionAnswer,
    Scenario, ScenarioChoice, StepSequence, StroopProgress, StroopSession, StroopTrial,
    VoiceSample,
};

/// Result of a successful `advance()`.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved to this step.
    Moved(AssessmentStep),
    /// Left the terminal step; the finished record is handed to the caller.
    Completed(AssessmentRecord),
}

/// Serializable in-progress state, used to survive a page refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub assessment_id: AssessmentId,
    pub variant: ScreeningVariant,
    pub current_step: AssessmentStep,
    pub record: AssessmentRecord,
    pub started_at: Timestamp,
}

/// The AssessmentFlow aggregate root.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    id: AssessmentId,
    variant: ScreeningVariant,
    sequence: StepSequence,
    status: FlowStatus,
    current_step: AssessmentStep,
    record: AssessmentRecord,
    /// Transient game state; never persisted.
    stroop: Option<StroopSession>,
    started_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<AssessmentEvent>,
}

impl AssessmentFlow {
    /// Starts a new assessment with an empty record.
    pub fn new(variant: ScreeningVariant) -> Self {
        let id = AssessmentId::new();
        let now = Timestamp::now();
        let sequence = StepSequence::for_variant(variant);

        let mut flow = Self {
            id,
            variant,
            sequence,
            status: FlowStatus::InProgress,
            current_step: sequence.first(),
            record: AssessmentRecord::new(),
            stroop: None,
            started_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        flow.record_event(AssessmentEvent::Started {
            assessment_id: id,
            variant,
            started_at: now,
        });

        flow
    }

    /// Rebuilds an in-progress flow from a snapshot.
    ///
    /// Rejects snapshots whose step is not part of the variant, whose record
    /// was already finalized, or that carry telemetry the variant never
    /// collects.
    pub fn restore(snapshot: FlowSnapshot) -> Result<Self, DomainError> {
        let sequence = StepSequence::for_variant(snapshot.variant);

        if !sequence.contains(snapshot.current_step) {
            return Err(DomainError::new(
                ErrorCode::InvalidSnapshot,
                format!(
                    "Step {:?} is not part of the {} variant",
                    snapshot.current_step, snapshot.variant
                ),
            ));
        }
        if snapshot.record.is_finished() {
            return Err(DomainError::new(
                ErrorCode::InvalidSnapshot,
                "Snapshot holds an already completed record",
            ));
        }
        if !snapshot.variant.collects_telemetry()
            && (snapshot.record.voice.is_some() || snapshot.record.game.is_some())
        {
            return Err(DomainError::new(
                ErrorCode::InvalidSnapshot,
                "Reduced snapshot carries voice or game data",
            ));
        }

        Ok(Self {
            id: snapshot.assessment_id,
            variant: snapshot.variant,
            sequence,
            status: FlowStatus::InProgress,
            current_step: snapshot.current_step,
            record: snapshot.record,
            stroop: None,
            started_at: snapshot.started_at,
            updated_at: Timestamp::now(),
            domain_events: Vec::new(),
        })
    }

    /// Captures the state needed to resume later.
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            assessment_id: self.id,
            variant: self.variant,
            current_step: self.current_step,
            record: self.record.clone(),
            started_at: self.started_at,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn variant(&self) -> ScreeningVariant {
        self.variant
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    pub fn current_step(&self) -> AssessmentStep {
        self.current_step
    }

    /// Read-only view of the answers collected so far.
    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn steps(&self) -> &'static [AssessmentStep] {
        self.sequence.all()
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn is_completed(&self) -> bool {
        self.status == FlowStatus::Completed
    }

    pub fn progress_percent(&self) -> u8 {
        self.sequence.progress_percent(self.current_step)
    }

    /// The stroop game, once it has been started.
    pub fn stroop(&self) -> Option<&StroopSession> {
        self.stroop.as_ref()
    }

    /// Trials the game will run, given the current education answer.
    pub fn stroop_trial_count(&self) -> u32 {
        EducationTier::from_education(self.record.demographics.education).stroop_trials()
    }

    /// Drains the recorded domain events.
    pub fn take_events(&mut self) -> Vec<AssessmentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Step gating and navigation
    // ───────────────────────────────────────────────────────────────

    /// Returns true if the given step's required data is present.
    pub fn is_step_satisfied(&self, step: AssessmentStep) -> bool {
        let record = &self.record;
        match step {
            AssessmentStep::Demographics => record.demographics.is_complete(),
            AssessmentStep::Voice => record
                .voice
                .as_ref()
                .map(VoiceSample::has_enough_words)
                .unwrap_or(false),
            AssessmentStep::Stroop => record.completed_game().is_some(),
            AssessmentStep::Nose | AssessmentStep::Dream => true,
            AssessmentStep::Money => record.questions.money.value() > 0,
            AssessmentStep::Market => record.scenarios.is_answered(Scenario::Market),
            AssessmentStep::Stove => record.scenarios.is_answered(Scenario::Stove),
            AssessmentStep::Scam => record.scenarios.is_answered(Scenario::Scam),
            AssessmentStep::Complete => true,
        }
    }

    /// Returns true if `advance()` would currently succeed.
    pub fn can_advance(&self) -> bool {
        self.status.is_mutable() && self.is_step_satisfied(self.current_step)
    }

    /// Returns true if `retreat()` would currently succeed.
    pub fn can_retreat(&self) -> bool {
        self.status.is_mutable() && self.sequence.previous(self.current_step).is_some()
    }

    /// Moves to the next step, or completes the assessment from `Complete`.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, DomainError> {
        self.ensure_mutable()?;

        if !self.is_step_satisfied(self.current_step) {
            return Err(DomainError::new(
                ErrorCode::StepIncomplete,
                format!("{} is not complete", self.current_step),
            )
            .with_detail("step", format!("{:?}", self.current_step)));
        }

        match self.sequence.next(self.current_step) {
            Some(next) => {
                let from = self.current_step;
                self.current_step = next;
                self.touch();
                self.record_event(AssessmentEvent::Advanced {
                    assessment_id: self.id,
                    from,
                    to: next,
                });
                Ok(AdvanceOutcome::Moved(next))
            }
            None => self.complete(),
        }
    }

    /// Moves to the previous step. Answers are kept.
    pub fn retreat(&mut self) -> Result<AssessmentStep, DomainError> {
        self.ensure_mutable()?;

        let previous = self.sequence.previous(self.current_step).ok_or_else(|| {
            DomainError::new(ErrorCode::AtFirstStep, "Already at the first step")
        })?;

        let from = self.current_step;
        self.current_step = previous;
        self.touch();
        self.record_event(AssessmentEvent::Retreated {
            assessment_id: self.id,
            from,
            to: previous,
        });
        Ok(previous)
    }

    fn complete(&mut self) -> Result<AdvanceOutcome, DomainError> {
        self.status = self
            .status
            .transition_to(FlowStatus::Completed)
            .map_err(|err| DomainError::new(ErrorCode::InvalidStateTransition, err.to_string()))?;

        let now = Timestamp::now();
        self.record.timestamp = Some(now);
        self.stroop = None;
        self.updated_at = now;
        self.record_event(AssessmentEvent::Completed {
            assessment_id: self.id,
            completed_at: now,
        });

        Ok(AdvanceOutcome::Completed(self.record.clone()))
    }

    // ───────────────────────────────────────────────────────────────
    // Per-step mutators
    // ───────────────────────────────────────────────────────────────

    /// Updates one demographic field.
    pub fn update_demographic(
        &mut self,
        field: DemographicField,
        value: &str,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.record.demographics.set(field, value)?;
        self.touch();
        Ok(())
    }

    /// Updates one symptom question.
    pub fn update_question(&mut self, answer: QuestionAnswer) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.record.questions.apply(answer);
        self.touch();
        Ok(())
    }

    /// Records the answer to one scenario.
    pub fn update_scenario(
        &mut self,
        scenario: Scenario,
        choice: ScenarioChoice,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.record.scenarios.set(scenario, choice);
        self.touch();
        Ok(())
    }

    /// Replaces the voice transcript; derived metrics are recomputed.
    pub fn replace_transcript(&mut self, transcript: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.ensure_step_available(AssessmentStep::Voice)?;
        self.record.voice = Some(VoiceSample::from_transcript(transcript));
        self.touch();
        Ok(())
    }

    /// Appends a recognizer chunk to the transcript.
    pub fn append_transcript(&mut self, chunk: &str) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.ensure_step_available(AssessmentStep::Voice)?;
        self.record
            .voice
            .get_or_insert_with(VoiceSample::default)
            .append(chunk);
        self.touch();
        Ok(())
    }

    /// Starts (or retakes) the stroop game. Any previous result is cleared
    /// until the new run finishes.
    pub fn start_stroop<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        at: Instant,
    ) -> Result<StroopTrial, DomainError> {
        self.ensure_mutable()?;
        self.ensure_step_available(AssessmentStep::Stroop)?;

        let mut session = StroopSession::new(self.stroop_trial_count());
        let trial = session.start(rng, at);
        self.stroop = Some(session);
        self.record.game = None;
        self.touch();
        Ok(trial)
    }

    /// Answers the trial on screen.
    pub fn answer_stroop<R: Rng + ?Sized>(
        &mut self,
        answer: Ink,
        rng: &mut R,
        at: Instant,
    ) -> Result<StroopProgress, DomainError> {
        self.ensure_mutable()?;
        self.ensure_step_available(AssessmentStep::Stroop)?;

        let session = self.stroop.as_mut().ok_or_else(|| {
            DomainError::new(ErrorCode::StroopNotRunning, "Stroop game has not been started")
        })?;
        let progress = session.answer(answer, rng, at)?;

        if let StroopProgress::Finished(result) = progress {
            self.record.game = Some(result);
            self.record_event(AssessmentEvent::StroopCompleted {
                assessment_id: self.id,
                result,
            });
        }
        self.touch();
        Ok(progress)
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::AssessmentCompleted,
                "Assessment is already completed",
            ))
        }
    }

    fn ensure_step_available(&self, step: AssessmentStep) -> Result<(), DomainError> {
        if self.sequence.contains(step) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::StepNotInVariant,
                format!("{} is not part of the {} variant", step, self.variant),
            ))
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn record_event(&mut self, event: AssessmentEvent) {
        self.domain_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Likert;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    const LONG_TRANSCRIPT: &str =
        "this morning I woke up early made some coffee read the paper and then walked the dog around the park";

    fn fill_demographics(flow: &mut AssessmentFlow, education: &str) {
        flow.update_demographic(DemographicField::Age, "68").unwrap();
        flow.update_demographic(DemographicField::Occupation, "Engineer").unwrap();
        flow.update_demographic(DemographicField::Education, education).unwrap();
        flow.update_demographic(DemographicField::Location, "Oslo, Norway").unwrap();
        flow.update_demographic(DemographicField::Gender, "male").unwrap();
    }

    fn play_stroop(flow: &mut AssessmentFlow) {
        let mut rng = StdRng::seed_from_u64(11);
        let mut at = Instant::now();
        let mut trial = flow.start_stroop(&mut rng, at).unwrap();
        loop {
            at += Duration::from_millis(600);
            match flow.answer_stroop(trial.ink, &mut rng, at).unwrap() {
                StroopProgress::NextTrial(next) => trial = next,
                StroopProgress::Finished(_) => break,
            }
        }
    }

    fn answer_scenarios(flow: &mut AssessmentFlow) {
        flow.update_scenario(Scenario::Market, ScenarioChoice::A).unwrap();
        flow.update_scenario(Scenario::Stove, ScenarioChoice::A).unwrap();
        flow.update_scenario(Scenario::Scam, ScenarioChoice::A).unwrap();
    }

    #[test]
    fn new_flow_starts_at_demographics() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        assert_eq!(flow.current_step(), AssessmentStep::Demographics);
        assert_eq!(flow.status(), FlowStatus::InProgress);
        let events = flow.take_events();
        assert!(matches!(events.as_slice(), [AssessmentEvent::Started { .. }]));
    }

    #[test]
    fn advance_rejected_while_any_demographic_is_empty() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        flow.update_demographic(DemographicField::Age, "68").unwrap();
        flow.update_demographic(DemographicField::Occupation, "Engineer").unwrap();
        flow.update_demographic(DemographicField::Education, "masters").unwrap();
        flow.update_demographic(DemographicField::Location, "Oslo").unwrap();

        assert!(!flow.can_advance());
        let err = flow.advance().unwrap_err();
        assert_eq!(err.code, ErrorCode::StepIncomplete);
        assert_eq!(flow.current_step(), AssessmentStep::Demographics);

        flow.update_demographic(DemographicField::Gender, "other").unwrap();
        assert_eq!(flow.advance().unwrap(), AdvanceOutcome::Moved(AssessmentStep::Voice));
    }

    #[test]
    fn reduced_flow_goes_from_demographics_to_nose() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        fill_demographics(&mut flow, "bachelors");
        assert_eq!(flow.advance().unwrap(), AdvanceOutcome::Moved(AssessmentStep::Nose));
    }

    #[test]
    fn voice_step_needs_fifteen_words() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        fill_demographics(&mut flow, "masters");
        flow.advance().unwrap();

        flow.replace_transcript("too short um").unwrap();
        assert!(!flow.can_advance());

        flow.replace_transcript(LONG_TRANSCRIPT).unwrap();
        assert!(flow.can_advance());
        assert_eq!(flow.advance().unwrap(), AdvanceOutcome::Moved(AssessmentStep::Stroop));
    }

    #[test]
    fn stroop_step_needs_a_finished_run() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        fill_demographics(&mut flow, "doctorate");
        flow.advance().unwrap();
        flow.replace_transcript(LONG_TRANSCRIPT).unwrap();
        flow.advance().unwrap();

        assert!(!flow.can_advance());
        play_stroop(&mut flow);

        let game = flow.record().game.unwrap();
        assert_eq!(game.trials, 16);
        assert_eq!(game.accuracy.value(), 100);
        assert_eq!(game.average_reaction_ms, 600);
        assert!(flow.can_advance());
    }

    #[test]
    fn stroop_retake_clears_previous_result() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        fill_demographics(&mut flow, "other");
        play_stroop(&mut flow);
        assert!(flow.record().game.is_some());

        flow.start_stroop(&mut StdRng::seed_from_u64(1), Instant::now()).unwrap();
        assert!(flow.record().game.is_none());
        assert!(!flow.is_step_satisfied(AssessmentStep::Stroop));
    }

    #[test]
    fn stroop_trial_count_follows_education() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        assert_eq!(flow.stroop_trial_count(), 12);
        flow.update_demographic(DemographicField::Education, "masters").unwrap();
        assert_eq!(flow.stroop_trial_count(), 14);
        flow.update_demographic(DemographicField::Education, "doctorate").unwrap();
        assert_eq!(flow.stroop_trial_count(), 16);
        flow.update_demographic(DemographicField::Education, "bachelors").unwrap();
        assert_eq!(flow.stroop_trial_count(), 12);
    }

    #[test]
    fn answer_stroop_before_start_is_rejected() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        let err = flow
            .answer_stroop(Ink::Red, &mut StdRng::seed_from_u64(3), Instant::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StroopNotRunning);
    }

    #[test]
    fn telemetry_mutators_rejected_in_reduced_variant() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        let err = flow.replace_transcript("hello").unwrap_err();
        assert_eq!(err.code, ErrorCode::StepNotInVariant);
        let err = flow
            .start_stroop(&mut StdRng::seed_from_u64(3), Instant::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StepNotInVariant);
        assert!(flow.record().voice.is_none());
    }

    #[test]
    fn scenario_steps_gate_on_their_own_answer() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        fill_demographics(&mut flow, "other");
        for _ in 0..4 {
            flow.advance().unwrap(); // -> nose, dream, money, market
        }
        assert_eq!(flow.current_step(), AssessmentStep::Market);
        assert!(!flow.can_advance());

        // Answering a different scenario does not unlock this one.
        flow.update_scenario(Scenario::Scam, ScenarioChoice::B).unwrap();
        assert!(!flow.can_advance());

        flow.update_scenario(Scenario::Market, ScenarioChoice::C).unwrap();
        assert_eq!(flow.advance().unwrap(), AdvanceOutcome::Moved(AssessmentStep::Stove));
    }

    #[test]
    fn retreat_keeps_answers_and_stops_at_first_step() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        assert!(!flow.can_retreat());
        assert_eq!(flow.retreat().unwrap_err().code, ErrorCode::AtFirstStep);

        fill_demographics(&mut flow, "masters");
        flow.advance().unwrap();
        flow.update_question(QuestionAnswer::Nose(true)).unwrap();
        assert_eq!(flow.retreat().unwrap(), AssessmentStep::Demographics);
        assert!(flow.record().questions.nose);
        assert!(flow.record().demographics.is_complete());
    }

    #[test]
    fn advance_from_complete_finishes_exactly_once() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        fill_demographics(&mut flow, "masters");
        answer_scenarios(&mut flow);
        flow.update_question(QuestionAnswer::Money(Likert::One)).unwrap();

        let mut outcome = flow.advance().unwrap();
        while let AdvanceOutcome::Moved(_) = outcome {
            outcome = flow.advance().unwrap();
        }

        let record = match outcome {
            AdvanceOutcome::Completed(record) => record,
            other => panic!("unexpected {:?}", other),
        };
        assert!(record.timestamp.is_some());
        assert_eq!(record.questions.money, Likert::One);
        assert!(flow.is_completed());

        assert_eq!(flow.advance().unwrap_err().code, ErrorCode::AssessmentCompleted);
        assert_eq!(flow.retreat().unwrap_err().code, ErrorCode::AssessmentCompleted);
        assert_eq!(
            flow.update_question(QuestionAnswer::Dream(true)).unwrap_err().code,
            ErrorCode::AssessmentCompleted
        );

        let completed = flow
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, AssessmentEvent::Completed { .. }))
            .count();
        assert_eq!(completed, 1);
    }

    #[test]
    fn mutators_only_touch_their_subtree() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        let before = flow.record().clone();
        flow.update_scenario(Scenario::Stove, ScenarioChoice::B).unwrap();

        let after = flow.record();
        assert_eq!(after.demographics, before.demographics);
        assert_eq!(after.questions, before.questions);
        assert_eq!(after.voice, before.voice);
        assert_eq!(after.scenarios.market, None);
        assert_eq!(after.scenarios.stove, Some(ScenarioChoice::B));
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        fill_demographics(&mut flow, "masters");
        flow.advance().unwrap();
        flow.append_transcript("um hello").unwrap();

        let restored = AssessmentFlow::restore(flow.snapshot()).unwrap();
        assert_eq!(restored.id(), flow.id());
        assert_eq!(restored.current_step(), AssessmentStep::Voice);
        assert_eq!(restored.record(), flow.record());
        assert!(restored.stroop().is_none());
    }

    #[test]
    fn restore_rejects_step_outside_variant() {
        let mut snapshot = AssessmentFlow::new(ScreeningVariant::Reduced).snapshot();
        snapshot.current_step = AssessmentStep::Stroop;
        let err = AssessmentFlow::restore(snapshot).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSnapshot);
    }

    #[test]
    fn restore_rejects_finished_record() {
        let mut snapshot = AssessmentFlow::new(ScreeningVariant::Full).snapshot();
        snapshot.record.timestamp = Some(Timestamp::now());
        assert!(AssessmentFlow::restore(snapshot).is_err());
    }

    #[test]
    fn completing_twice_is_an_invalid_transition() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Reduced);
        flow.status = FlowStatus::Completed;

        let err = flow.complete().unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(flow.record().timestamp.is_none());
    }

    #[test]
    fn progress_tracks_position() {
        let mut flow = AssessmentFlow::new(ScreeningVariant::Full);
        assert_eq!(flow.progress_percent(), 10);
        fill_demographics(&mut flow, "masters");
        flow.advance().unwrap();
        assert_eq!(flow.progress_percent(), 20);
    }
}
