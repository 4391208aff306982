//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `assessment` - Screening wizard aggregate and the record it fills
//! - `analysis` - Pure risk scoring over a completed record

pub mod analysis;
pub mod assessment;
pub mod foundation;
