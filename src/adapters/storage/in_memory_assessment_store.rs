//! In-Memory Assessment Store Adapter
//!
//! Holds serialized JSON strings per key, the way a browser key-value store
//! does. Useful for testing and development.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::FlowSnapshot;
use crate::ports::{
    AssessmentStore, CompletedAssessment, StoreError, CURRENT_ASSESSMENT_KEY,
    LATEST_ASSESSMENT_KEY,
};

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryAssessmentStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value under `key` (useful for tests with corrupted data)
    pub async fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.write().await.insert(key.to_string(), value.into());
    }

    /// Returns the raw value under `key`
    pub async fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn write_key<T: Serialize + Sync>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::SerializationFailed {
            key,
            reason: e.to_string(),
        })?;
        self.insert_raw(key, json).await;
        Ok(())
    }

    async fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let Some(json) = self.get_raw(key).await else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StoreError::DeserializationFailed {
                key,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save_current(&self, snapshot: &FlowSnapshot) -> Result<(), StoreError> {
        self.write_key(CURRENT_ASSESSMENT_KEY, snapshot).await
    }

    async fn load_current(&self) -> Result<Option<FlowSnapshot>, StoreError> {
        self.read_key(CURRENT_ASSESSMENT_KEY).await
    }

    async fn clear_current(&self) -> Result<(), StoreError> {
        self.entries.write().await.remove(CURRENT_ASSESSMENT_KEY);
        Ok(())
    }

    async fn save_latest(&self, completed: &CompletedAssessment) -> Result<(), StoreError> {
        self.write_key(LATEST_ASSESSMENT_KEY, completed).await
    }

    async fn load_latest(&self) -> Result<Option<CompletedAssessment>, StoreError> {
        self.read_key(LATEST_ASSESSMENT_KEY).await
    }
}
