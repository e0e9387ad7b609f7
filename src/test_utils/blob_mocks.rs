//! In-memory mock implementation of the blob store port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{app_error::AppResult, application::ports::blob_store::BlobStore};

/// Blob store backed by a plain map. Mirrors the real store's semantics:
/// whole-value overwrites, last writer wins.
#[derive(Default)]
pub struct InMemoryBlobStore {
    pub blobs: Mutex<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
