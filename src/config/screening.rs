//! Screening configuration

use serde::Deserialize;

use crate::domain::foundation::ScreeningVariant;

/// Selects which wizard runs and which weight table scores it.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct ScreeningConfig {
    /// `full` (voice and stroop included) or `reduced`
    #[serde(default)]
    pub variant: ScreeningVariant,
}
