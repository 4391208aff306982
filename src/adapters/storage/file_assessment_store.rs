//! File-based Assessment Store Adapter
//!
//! Stores each key as a JSON file under a data directory
//! (`<data_dir>/triad_current_assessment.json`, ...).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::FlowSnapshot;
use crate::ports::{
    AssessmentStore, CompletedAssessment, StoreError, CURRENT_ASSESSMENT_KEY,
    LATEST_ASSESSMENT_KEY,
};

/// File-based storage for assessments
#[derive(Debug, Clone)]
pub struct FileAssessmentStore {
    base_path: PathBuf,
}

impl FileAssessmentStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileAssessmentStore::new("./data/assessments");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    async fn write_key<T: Serialize + Sync>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let json = serde_json::to_string_pretty(value).map_err(|e| {
            StoreError::SerializationFailed {
                key,
                reason: e.to_string(),
            }
        })?;

        fs::write(self.key_path(key), json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn read_key<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let json = match fs::read_to_string(self.key_path(key)).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
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
impl AssessmentStore for FileAssessmentStore {
    async fn save_current(&self, snapshot: &FlowSnapshot) -> Result<(), StoreError> {
        self.write_key(CURRENT_ASSESSMENT_KEY, snapshot).await
    }

    async fn load_current(&self) -> Result<Option<FlowSnapshot>, StoreError> {
        self.read_key(CURRENT_ASSESSMENT_KEY).await
    }

    async fn clear_current(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(CURRENT_ASSESSMENT_KEY)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    async fn save_latest(&self, completed: &CompletedAssessment) -> Result<(), StoreError> {
        self.write_key(LATEST_ASSESSMENT_KEY, completed).await
    }

    async fn load_latest(&self) -> Result<Option<CompletedAssessment>, StoreError> {
        self.read_key(LATEST_ASSESSMENT_KEY).await
    }
}
