use std::sync::Arc;

use uuid::Uuid;

use super::{read_list, write_list};
use crate::{
    app_error::AppResult,
    application::ports::blob_store::BlobStore,
    domain::entities::transaction::TransactionRecord,
};

/// Blob key holding the settlement attempt history.
const TRANSACTIONS_KEY: &str = "transactions";

/// Append-only store of settlement attempts, newest first.
///
/// Records are never deleted; growth is unbounded (there is no archival
/// policy for payment history).
pub struct TransactionStore {
    blobs: Arc<dyn BlobStore>,
}

impl TransactionStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// All settlement attempts, newest first.
    pub async fn list(&self) -> AppResult<Vec<TransactionRecord>> {
        read_list(&self.blobs, TRANSACTIONS_KEY).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<TransactionRecord>> {
        Ok(self.list().await?.into_iter().find(|t| t.id == id))
    }

    /// Insert a freshly created attempt at the head of the history.
    pub async fn prepend(&self, record: &TransactionRecord) -> AppResult<()> {
        let mut transactions = self.list().await?;
        transactions.insert(0, record.clone());
        write_list(&self.blobs, TRANSACTIONS_KEY, &transactions).await
    }

    /// Apply a mutation to the record with the given id and persist the
    /// whole history. Returns the updated record, or `None` when the id is
    /// unknown.
    pub async fn update(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut TransactionRecord) + Send,
    ) -> AppResult<Option<TransactionRecord>> {
        let mut transactions = self.list().await?;
        let Some(record) = transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        apply(record);
        let updated = record.clone();
        write_list(&self.blobs, TRANSACTIONS_KEY, &transactions).await?;
        Ok(Some(updated))
    }
}
