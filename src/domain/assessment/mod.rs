//! Assessment module - the screening wizard and the record it fills.
//!
//! # Components
//!
//! - `AssessmentFlow` - Aggregate root; step sequencing, advance gates, per-step mutators
//! - `AssessmentStep` / `StepSequence` - Variant-aware ordered step list
//! - `AssessmentRecord` - Everything the participant entered
//! - `VoiceSample` - Transcript plus derived text metrics
//! - `StroopSession` - Reaction-time game protocol
//! - `prompts` - Static wording for question and scenario steps

mod answers;
mod demographics;
mod events;
mod flow;
mod prompts;
mod record;
mod step;
mod stroop;
mod voice;

pub use answers::{QuestionAnswer, Questions, Scenario, ScenarioChoice, Scenarios};
pub use demographics::{DemographicField, Demographics, Education, Gender};
pub use events::AssessmentEvent;
pub use flow::{AdvanceOutcome, AssessmentFlow, FlowSnapshot};
pub use prompts::{scenario_for_step, scenario_options, step_prompt, ScenarioOption, StepPrompt};
pub use record::AssessmentRecord;
pub use step::{AssessmentStep, StepSequence};
pub use stroop::{
    GameKind, GameResult, Ink, StroopProgress, StroopSession, StroopTrial,
    INCONGRUENT_PROBABILITY,
};
pub use voice::{tokenize, TranscriptAnalysis, VoiceSample, FILLER_WORDS, MIN_VOICE_WORDS};
