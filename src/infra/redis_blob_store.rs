use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use super::InfraError;
use crate::{
    app_error::{AppError, AppResult},
    application::ports::blob_store::BlobStore,
};

/// Redis-backed blob store for production use.
///
/// One GET / SET per operation; overwrites are whole-value, matching the
/// last-writer-wins contract of the `BlobStore` port.
#[derive(Clone)]
pub struct RedisBlobStore {
    manager: ConnectionManager,
}

impl RedisBlobStore {
    pub async fn connect(redis_url: &str) -> Result<Self, InfraError> {
        let client = redis::Client::open(redis_url).map_err(InfraError::RedisConnection)?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(InfraError::RedisConnection)?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl BlobStore for RedisBlobStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();
        conn.get(key)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }
}
