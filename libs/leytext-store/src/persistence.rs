//! Persistence of the word list under a single storage key.

use crate::backend::KeyValueStore;
use crate::codec;
use crate::error::StorageError;
use leytext_core::Record;
use std::future::Future;
use std::sync::Arc;

/// Durable copy of the word list.
pub trait PersistenceAdapter: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Vec<Record>, StorageError>> + Send;

    /// Write the whole list. Partial writes are not supported.
    fn save(&self, records: &[Record]) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Word list stored as a JSON array under one key of a key-value backend.
pub struct ScopedJsonAdapter<K> {
    backend: Arc<K>,
    key: String,
}

impl<K: KeyValueStore> ScopedJsonAdapter<K> {
    pub fn new(backend: Arc<K>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &Arc<K> {
        &self.backend
    }
}

impl<K: KeyValueStore> PersistenceAdapter for ScopedJsonAdapter<K> {
    /// Load the list, rewriting it once in canonical form if it was stored in
    /// an older shape.
    async fn load(&self) -> Result<Vec<Record>, StorageError> {
        let Some(payload) = self.backend.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };

        let decoded = codec::decode(&payload).map_err(|reason| StorageError::Corrupt {
            key: self.key.clone(),
            reason,
        })?;

        if decoded.normalized {
            tracing::info!(
                "Normalizing {} stored words under {:?} to the canonical shape",
                decoded.records.len(),
                self.key
            );
            // Assigned ids are derived from the payload, so the next load retries
            // with the same ids.
            if let Err(e) = self.save(&decoded.records).await {
                tracing::warn!("Failed to rewrite normalized words: {}", e);
            }
        }

        Ok(decoded.records)
    }

    async fn save(&self, records: &[Record]) -> Result<(), StorageError> {
        let payload = codec::encode(records)?;
        self.backend.set_item(&self.key, payload).await?;
        tracing::debug!("Saved {} words under {:?}", records.len(), self.key);
        Ok(())
    }
}
