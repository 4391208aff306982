//! Static wording for the question and scenario steps.

use super::{AssessmentStep, Scenario, ScenarioChoice};

/// One selectable scenario answer with the interpretation shown afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioOption {
    pub choice: ScenarioChoice,
    pub label: &'static str,
    pub analysis: &'static str,
}

/// Context line plus the question put to the participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPrompt {
    pub context: &'static str,
    pub question: &'static str,
}

const MARKET_OPTIONS: [ScenarioOption; 3] = [
    ScenarioOption {
        choice: ScenarioChoice::A,
        label: "I remember all 5 easily.",
        analysis: "Normal memory function",
    },
    ScenarioOption {
        choice: ScenarioChoice::B,
        label: "I remember 1 or 2, or I call home to ask.",
        analysis: "Mild memory difficulty",
    },
    ScenarioOption {
        choice: ScenarioChoice::C,
        label: "I feel panicked and might go back home immediately.",
        analysis: "Anxiety/memory failure",
    },
];

const STOVE_OPTIONS: [ScenarioOption; 3] = [
    ScenarioOption {
        choice: ScenarioChoice::A,
        label: "I turned the stove off before answering.",
        analysis: "Good executive function",
    },
    ScenarioOption {
        choice: ScenarioChoice::B,
        label: "I kept checking the stove while talking.",
        analysis: "Moderate executive function",
    },
    ScenarioOption {
        choice: ScenarioChoice::C,
        label: "I forgot the water was boiling until the pot burned.",
        analysis: "Executive dysfunction",
    },
];

const SCAM_OPTIONS: [ScenarioOption; 3] = [
    ScenarioOption {
        choice: ScenarioChoice::A,
        label: "Delete it / Ignore it.",
        analysis: "Good financial judgment",
    },
    ScenarioOption {
        choice: ScenarioChoice::B,
        label: "Ask a family member about it.",
        analysis: "Cautious but reasonable",
    },
    ScenarioOption {
        choice: ScenarioChoice::C,
        label: "It sounds exciting, I might reply.",
        analysis: "Poor financial judgment",
    },
];

/// Answer options for a scenario, A to C.
pub fn scenario_options(scenario: Scenario) -> &'static [ScenarioOption; 3] {
    match scenario {
        Scenario::Market => &MARKET_OPTIONS,
        Scenario::Stove => &STOVE_OPTIONS,
        Scenario::Scam => &SCAM_OPTIONS,
    }
}

/// Maps a scenario step to its scenario.
pub fn scenario_for_step(step: AssessmentStep) -> Option<Scenario> {
    match step {
        AssessmentStep::Market => Some(Scenario::Market),
        AssessmentStep::Stove => Some(Scenario::Stove),
        AssessmentStep::Scam => Some(Scenario::Scam),
        _ => None,
    }
}

/// Wording for the question and scenario steps; `None` for form-style steps.
pub fn step_prompt(step: AssessmentStep) -> Option<StepPrompt> {
    let prompt = match step {
        AssessmentStep::Nose => StepPrompt {
            context: "Loss of smell is often one of the earliest signs of Alzheimer's, appearing years before memory loss.",
            question: "Have you noticed that food tastes blander or that you can't smell things like coffee or soap as well as you used to?",
        },
        AssessmentStep::Dream => StepPrompt {
            context: "Acting out dreams (kicking, shouting) is a strong warning sign for neurodegenerative disease.",
            question: "Have you been told that you kick, punch, or shout while you are sleeping?",
        },
        AssessmentStep::Money => StepPrompt {
            context: "Complex arithmetic is often the first executive function to slip.",
            question: "Do you find it harder to calculate tips or count change at the store than you did 5 years ago?",
        },
        AssessmentStep::Market => StepPrompt {
            context: "You are going to the local market to buy 5 specific items. You realize you left your list at home.",
            question: "What happens next?",
        },
        AssessmentStep::Stove => StepPrompt {
            context: "You are boiling water for tea and the phone rings. You talk for 10 minutes.",
            question: "What happens next?",
        },
        AssessmentStep::Scam => StepPrompt {
            context: "You receive a message saying you won a lottery but need to pay a small fee to claim it.",
            question: "What do you do?",
        },
        _ => return None,
    };
    Some(prompt)
}
