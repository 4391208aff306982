//! Questionnaire and scenario answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Likert, ValidationError};

/// Answers to the three symptom questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questions {
    /// Noticed a loss of smell.
    pub nose: bool,
    /// Told they act out dreams in their sleep.
    pub dream: bool,
    /// Trouble with money arithmetic compared to five years ago (3 = no change).
    pub money: Likert,
}

/// A narrow update to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question", content = "value", rename_all = "snake_case")]
pub enum QuestionAnswer {
    Nose(bool),
    Dream(bool),
    Money(Likert),
}

impl Questions {
    pub fn apply(&mut self, answer: QuestionAnswer) {
        match answer {
            QuestionAnswer::Nose(v) => self.nose = v,
            QuestionAnswer::Dream(v) => self.dream = v,
            QuestionAnswer::Money(v) => self.money = v,
        }
    }
}

/// One of the three everyday-judgement scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Market,
    Stove,
    Scam,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Market, Scenario::Stove, Scenario::Scam];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Market => "market",
            Scenario::Stove => "stove",
            Scenario::Scam => "scam",
        }
    }
}

/// Letter answer to a scenario, from best (A) to worst (C) judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScenarioChoice {
    A,
    B,
    C,
}

impl ScenarioChoice {
    pub const ALL: [ScenarioChoice; 3] = [ScenarioChoice::A, ScenarioChoice::B, ScenarioChoice::C];

    pub fn letter(&self) -> &'static str {
        match self {
            ScenarioChoice::A => "A",
            ScenarioChoice::B => "B",
            ScenarioChoice::C => "C",
        }
    }
}

impl FromStr for ScenarioChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(ScenarioChoice::A),
            "B" => Ok(ScenarioChoice::B),
            "C" => Ok(ScenarioChoice::C),
            _ => Err(ValidationError::invalid_format(
                "scenario",
                format!("expected A, B or C, got '{}'", s),
            )),
        }
    }
}

impl fmt::Display for ScenarioChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Scenario answers; `None` until the participant picks an option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenarios {
    pub market: Option<ScenarioChoice>,
    pub stove: Option<ScenarioChoice>,
    pub scam: Option<ScenarioChoice>,
}

impl Scenarios {
    pub fn get(&self, scenario: Scenario) -> Option<ScenarioChoice> {
        match scenario {
            Scenario::Market => self.market,
            Scenario::Stove => self.stove,
            Scenario::Scam => self.scam,
        }
    }

    pub fn set(&mut self, scenario: Scenario, choice: ScenarioChoice) {
        let slot = match scenario {
            Scenario::Market => &mut self.market,
            Scenario::Stove => &mut self.stove,
            Scenario::Scam => &mut self.scam,
        };
        *slot = Some(choice);
    }

    pub fn is_answered(&self, scenario: Scenario) -> bool {
        self.get(scenario).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_default_to_no_symptoms_and_neutral_money() {
        let q = Questions::default();
        assert!(!q.nose);
        assert!(!q.dream);
        assert_eq!(q.money, Likert::Three);
    }

    #[test]
    fn apply_touches_only_its_question() {
        let mut q = Questions::default();
        q.apply(QuestionAnswer::Nose(true));
        assert!(q.nose);
        assert!(!q.dream);
        q.apply(QuestionAnswer::Money(Likert::Five));
        assert_eq!(q.money, Likert::Five);
        assert!(q.nose);
    }

    #[test]
    fn scenarios_start_unanswered() {
        let s = Scenarios::default();
        for scenario in Scenario::ALL {
            assert!(!s.is_answered(scenario));
        }
    }

    #[test]
    fn set_touches_only_its_scenario() {
        let mut s = Scenarios::default();
        s.set(Scenario::Stove, ScenarioChoice::C);
        assert_eq!(s.get(Scenario::Stove), Some(ScenarioChoice::C));
        assert_eq!(s.market, None);
        assert_eq!(s.scam, None);
    }

    #[test]
    fn choice_parses_uppercase_letters_only() {
        assert_eq!("B".parse::<ScenarioChoice>().unwrap(), ScenarioChoice::B);
        assert!("b".parse::<ScenarioChoice>().is_err());
        assert!("".parse::<ScenarioChoice>().is_err());
    }

    #[test]
    fn question_answer_serializes_tagged() {
        let json = serde_json::to_value(QuestionAnswer::Money(Likert::Two)).unwrap();
        assert_eq!(json["question"], "money");
        assert_eq!(json["value"], 2);
    }
}
