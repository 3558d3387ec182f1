//! In-memory blob store for tests and ephemeral sessions.

use super::{BlobStore, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// HashMap-backed blob store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent string values; keep serving it.
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
