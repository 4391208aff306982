//! ScreeningVariant - the single flag selecting full or reduced behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which flavour of the screening wizard is running.
///
/// `Full` collects voice and stroop telemetry and scores with the
/// finer-grained weight table. `Reduced` skips both telemetry steps and
/// scores questionnaire answers only, with the coarser table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningVariant {
    #[default]
    Full,
    Reduced,
}

impl ScreeningVariant {
    /// Returns true if the voice and stroop steps are part of the flow.
    pub fn collects_telemetry(&self) -> bool {
        matches!(self, ScreeningVariant::Full)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningVariant::Full => "full",
            ScreeningVariant::Reduced => "reduced",
        }
    }
}

impl fmt::Display for ScreeningVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreeningVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ScreeningVariant::Full),
            "reduced" => Ok(ScreeningVariant::Reduced),
            other => Err(ValidationError::invalid_format(
                "variant",
                format!("unknown screening variant '{}'", other),
            )),
        }
    }
}
