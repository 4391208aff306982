//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Assessment persistence (file, in-memory)

pub mod storage;

pub use storage::{store_from_config, FileAssessmentStore, InMemoryAssessmentStore};
