//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `AssessmentStore` - In-progress snapshot and latest completed assessment

mod assessment_store;

pub use assessment_store::{
    AssessmentStore, CompletedAssessment, StoreError, CURRENT_ASSESSMENT_KEY,
    LATEST_ASSESSMENT_KEY,
};
