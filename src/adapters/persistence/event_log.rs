use std::sync::Arc;

use super::{read_list, write_list};
use crate::{
    app_error::AppResult,
    application::ports::blob_store::BlobStore,
    domain::entities::system_log::{LogLevel, SystemLogEntry},
};

/// Blob key holding the audit log.
const SYSTEM_LOGS_KEY: &str = "system_logs";

/// Ring capacity: the newest entries win, the oldest are dropped.
pub const MAX_LOG_ENTRIES: usize = 150;

/// Append-only audit log of state transitions, newest first, bounded to
/// [`MAX_LOG_ENTRIES`].
pub struct EventLog {
    blobs: Arc<dyn BlobStore>,
}

impl EventLog {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Prepend a new entry and truncate to the ring capacity.
    pub async fn append(
        &self,
        event: &str,
        details: impl Into<String>,
        level: LogLevel,
    ) -> AppResult<SystemLogEntry> {
        let entry = SystemLogEntry::new(event, details, level);
        let mut entries: Vec<SystemLogEntry> = read_list(&self.blobs, SYSTEM_LOGS_KEY).await?;
        entries.insert(0, entry.clone());
        entries.truncate(MAX_LOG_ENTRIES);
        write_list(&self.blobs, SYSTEM_LOGS_KEY, &entries).await?;
        Ok(entry)
    }

    /// Full log, newest first.
    pub async fn entries(&self) -> AppResult<Vec<SystemLogEntry>> {
        read_list(&self.blobs, SYSTEM_LOGS_KEY).await
    }
}
