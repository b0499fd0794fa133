use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use rankquiz_core::model::Branch;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence contract for per-branch quiz stats.
///
/// The payload is an opaque serialized `QuizStats` keyed by branch name.
/// Interpretation (and recovery from corrupt payloads) is the services
/// layer's job; storage only does get-or-absent and full overwrite.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Fetch the stored payload for a branch, `None` when the branch has no
    /// record yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load(&self, branch: Branch) -> Result<Option<String>, StorageError>;

    /// Overwrite the payload for a branch, creating the record if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn store(&self, branch: Branch, payload: &str) -> Result<(), StorageError>;

    /// Remove the record for a branch. Removing an absent record is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete(&self, branch: Branch) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStatsRepository {
    records: Arc<Mutex<HashMap<Branch, String>>>,
}

impl InMemoryStatsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn load(&self, branch: Branch) -> Result<Option<String>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&branch).cloned())
    }

    async fn store(&self, branch: Branch, payload: &str) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(branch, payload.to_string());
        Ok(())
    }

    async fn delete(&self, branch: Branch) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&branch);
        Ok(())
    }
}
