//! Persistence adapters over the external blob store.
//!
//! Every collection lives under a single string key holding one
//! JSON-serialized array. Each mutation is a read-modify-write of the whole
//! blob; the store offers no locking, so last writer wins.

pub mod event_log;
pub mod subscription;
pub mod transaction;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::blob_store::BlobStore,
};

/// Read a JSON array blob, falling back to empty when the key is absent.
pub(crate) async fn read_list<T: DeserializeOwned>(
    blobs: &Arc<dyn BlobStore>,
    key: &str,
) -> AppResult<Vec<T>> {
    match blobs.read(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("corrupt blob at key {key}: {e}"))),
        None => Ok(Vec::new()),
    }
}

/// Overwrite a JSON array blob in full.
pub(crate) async fn write_list<T: Serialize>(
    blobs: &Arc<dyn BlobStore>,
    key: &str,
    items: &[T],
) -> AppResult<()> {
    let raw = serde_json::to_string(items)
        .map_err(|e| AppError::Internal(format!("failed to serialize blob for key {key}: {e}")))?;
    blobs.write(key, &raw).await
}
