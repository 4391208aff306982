//! Stroop reaction-time game.
//!
//! Each trial shows a colour word rendered in an ink colour; the participant
//! must name the ink. Randomness is injected so tests can seed it, and the
//! caller supplies the instant of every presentation and answer so elapsed
//! times are measured against one monotonic clock.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Percentage};

/// Probability that a trial after the first is incongruent (ink != word).
pub const INCONGRUENT_PROBABILITY: f64 = 0.75;

/// The four colours used both as words and as inks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ink {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Ink {
    pub const ALL: [Ink; 4] = [Ink::Red, Ink::Green, Ink::Blue, Ink::Yellow];

    /// The word shown on screen and on the answer buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Ink::Red => "RED",
            Ink::Green => "GREEN",
            Ink::Blue => "BLUE",
            Ink::Yellow => "YELLOW",
        }
    }

    /// Picks a colour uniformly, optionally excluding one.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, exclude: Option<Ink>) -> Ink {
        let options: Vec<Ink> = Ink::ALL
            .iter()
            .copied()
            .filter(|ink| Some(*ink) != exclude)
            .collect();
        options[rng.gen_range(0..options.len())]
    }
}

/// One word/ink pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StroopTrial {
    pub word: Ink,
    pub ink: Ink,
}

impl StroopTrial {
    /// The opening trial is always incongruent.
    pub fn opening<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let word = Ink::random(rng, None);
        let ink = Ink::random(rng, Some(word));
        Self { word, ink }
    }

    /// Later trials are incongruent with [`INCONGRUENT_PROBABILITY`],
    /// congruent otherwise.
    pub fn follow_up<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let word = Ink::random(rng, None);
        let ink = if rng.gen_bool(INCONGRUENT_PROBABILITY) {
            Ink::random(rng, Some(word))
        } else {
            word
        };
        Self { word, ink }
    }

    pub fn is_congruent(&self) -> bool {
        self.word == self.ink
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Stroop,
}

/// Summary of a finished game run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub kind: GameKind,
    pub trials: u32,
    pub accuracy: Percentage,
    pub average_reaction_ms: u32,
}

impl GameResult {
    /// Returns true if at least one run was completed.
    pub fn is_completed(&self) -> bool {
        self.trials > 0
    }
}

/// What happened after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StroopProgress {
    /// The game continues with this trial.
    NextTrial(StroopTrial),
    /// The last trial was answered.
    Finished(GameResult),
}

/// Running state of one stroop game.
#[derive(Debug, Clone)]
pub struct StroopSession {
    total_trials: u32,
    answered: u32,
    correct: u32,
    total_ms: u64,
    current: Option<(StroopTrial, Instant)>,
}

impl StroopSession {
    /// Creates an idle session that will run `total_trials` trials (at least one).
    pub fn new(total_trials: u32) -> Self {
        Self {
            total_trials: total_trials.max(1),
            answered: 0,
            correct: 0,
            total_ms: 0,
            current: None,
        }
    }

    pub fn total_trials(&self) -> u32 {
        self.total_trials
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// The trial on screen, if the game is running.
    pub fn current_trial(&self) -> Option<StroopTrial> {
        self.current.map(|(trial, _)| trial)
    }

    /// 1-based number of the trial on screen.
    pub fn trial_number(&self) -> u32 {
        self.answered + 1
    }

    /// Starts (or restarts) the game, resetting every counter.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R, at: Instant) -> StroopTrial {
        self.answered = 0;
        self.correct = 0;
        self.total_ms = 0;
        let trial = StroopTrial::opening(rng);
        self.current = Some((trial, at));
        trial
    }

    /// Records an answer given at `at` for the trial on screen.
    pub fn answer<R: Rng + ?Sized>(
        &mut self,
        answer: Ink,
        rng: &mut R,
        at: Instant,
    ) -> Result<StroopProgress, DomainError> {
        let (trial, presented_at) = self.current.ok_or_else(|| {
            DomainError::new(ErrorCode::StroopNotRunning, "No stroop trial is on screen")
        })?;

        let elapsed = at.saturating_duration_since(presented_at);
        self.total_ms += (elapsed.as_secs_f64() * 1000.0).round() as u64;
        if answer == trial.ink {
            self.correct += 1;
        }
        self.answered += 1;

        if self.answered >= self.total_trials {
            self.current = None;
            return Ok(StroopProgress::Finished(self.result()));
        }

        let next = StroopTrial::follow_up(rng);
        self.current = Some((next, at));
        Ok(StroopProgress::NextTrial(next))
    }

    fn result(&self) -> GameResult {
        let average = (self.total_ms as f64 / f64::from(self.total_trials)).round();
        GameResult {
            kind: GameKind::Stroop,
            trials: self.total_trials,
            accuracy: Percentage::from_ratio(self.correct, self.total_trials),
            average_reaction_ms: average.min(f64::from(u32::MAX)) as u32,
        }
    }
}
