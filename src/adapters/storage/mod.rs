//! Storage Adapters
//!
//! Implementations of the AssessmentStore port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentStore** - Stores each key as a JSON file on disk
//! - **InMemoryAssessmentStore** - Stores JSON strings in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{store_from_config, FileAssessmentStore, InMemoryAssessmentStore};
//!
//! // Production: file-based storage
//! let store = FileAssessmentStore::new("./data/assessments");
//!
//! // Testing: in-memory storage
//! let store = InMemoryAssessmentStore::new();
//!
//! // Or as configured
//! let store = store_from_config(&config.storage);
//! ```

mod file_assessment_store;
mod in_memory_assessment_store;

pub use file_assessment_store::FileAssessmentStore;
pub use in_memory_assessment_store::InMemoryAssessmentStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::AssessmentStore;

/// Builds the store selected by configuration.
pub fn store_from_config(config: &StorageConfig) -> Arc<dyn AssessmentStore> {
    match config.backend {
        StorageBackend::File => Arc::new(FileAssessmentStore::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryAssessmentStore::new()),
    }
}
