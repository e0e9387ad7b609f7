use async_trait::async_trait;

use crate::app_error::AppResult;

/// Port for the external key-value blob store.
///
/// Values are JSON-serialized documents keyed by plain strings. Reads are
/// get-or-absent, writes are full overwrites with last-writer-wins
/// semantics; there is no schema versioning and no transactional guarantee.
/// Callers that need "read, modify, write back" must accept that two
/// near-simultaneous writers racing on the same key can lose updates.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    async fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
