use std::sync::Arc;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::blob_store::BlobStore,
    domain::entities::subscription::SubscriptionInfo,
};

/// Blob key holding the single business account's subscription.
const SUBSCRIPTION_KEY: &str = "subscription";

/// Store for the account subscription record.
///
/// The derived entitlement status is never written here; only the dates,
/// tier, method and trial flag are persisted.
pub struct SubscriptionStore {
    blobs: Arc<dyn BlobStore>,
}

impl SubscriptionStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    pub async fn get(&self) -> AppResult<Option<SubscriptionInfo>> {
        match self.blobs.read(SUBSCRIPTION_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| AppError::Storage(format!("corrupt subscription blob: {e}"))),
            None => Ok(None),
        }
    }

    pub async fn put(&self, info: &SubscriptionInfo) -> AppResult<()> {
        let raw = serde_json::to_string(info)
            .map_err(|e| AppError::Internal(format!("failed to serialize subscription: {e}")))?;
        self.blobs.write(SUBSCRIPTION_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::subscription::PricingTier;
    use crate::test_utils::{InMemoryBlobStore, create_test_subscription};

    #[tokio::test]
    async fn test_round_trip() {
        let store = SubscriptionStore::new(Arc::new(InMemoryBlobStore::new()));
        assert!(store.get().await.unwrap().is_none());

        let info = create_test_subscription(|s| s.tier = PricingTier::Pro);
        store.put(&info).await.unwrap();

        let loaded = store.get().await.unwrap().unwrap();
        assert_eq!(loaded.tier, PricingTier::Pro);
        assert_eq!(loaded.expiry_date, info.expiry_date);
        assert_eq!(loaded.grace_date, info.grace_date);
    }
}
