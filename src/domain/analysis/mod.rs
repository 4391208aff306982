//! Analysis Module - Pure risk scoring over a completed assessment record.
//!
//! # Components
//!
//! - `EducationTier` - Baselines for the voice and stroop heuristics
//! - `RiskWeights` - Full and reduced weight tables for questionnaire signals
//! - `RiskScorer` - Sub-score computation, sum and clamp
//! - `RiskScore` / `RiskTier` - 0-100 score and its LOW/MODERATE/HIGH reading
//! - `ScreeningReport` - Everything the results view renders
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod baselines;
mod report;
mod risk_scorer;
mod risk_tier;
mod weights;

pub use baselines::{EducationTier, BASE_REACTION_MS, DEFAULT_AGE, REACTION_MS_PER_DECADE};
pub use report::ScreeningReport;
pub use risk_scorer::{
    stroop_risk, voice_risk, RiskBreakdown, RiskScorer, MAX_STROOP_RISK, MAX_VOICE_RISK,
};
pub use risk_tier::{RiskScore, RiskTier, HIGH_THRESHOLD, MODERATE_THRESHOLD};
pub use weights::{RiskWeights, ScenarioTable};
