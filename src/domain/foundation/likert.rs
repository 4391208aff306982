//! Likert value object for five-point self-report questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Five-point self-report scale. `3` is the neutral midpoint ("no change").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Likert {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Likert {
    /// All points in ascending order.
    pub const ALL: [Likert; 5] = [Likert::One, Likert::Two, Likert::Three, Likert::Four, Likert::Five];

    /// Creates a Likert point from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Likert::One),
            2 => Ok(Likert::Two),
            3 => Ok(Likert::Three),
            4 => Ok(Likert::Four),
            5 => Ok(Likert::Five),
            _ => Err(ValidationError::out_of_range("likert", 1, 5, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the label printed under the scale.
    pub fn label(&self) -> &'static str {
        match self {
            Likert::One => "1",
            Likert::Two => "2",
            Likert::Three => "3 - No change",
            Likert::Four => "4",
            Likert::Five => "5",
        }
    }

    /// Returns true for the neutral midpoint.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Likert::Three)
    }
}

impl TryFrom<u8> for Likert {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Likert::try_from_u8(value)
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.value()
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
