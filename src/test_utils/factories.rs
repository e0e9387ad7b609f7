//! Test data factories and use-case builders.
//!
//! Each factory creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::sync::Arc;
use std::time::Duration;

use super::InMemoryBlobStore;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    adapters::{
        http::app_state::AppState,
        persistence::{
            event_log::EventLog, subscription::SubscriptionStore, transaction::TransactionStore,
        },
    },
    application::{
        ports::blob_store::BlobStore,
        use_cases::{
            admin::AdminUseCases,
            collection::{CollectionUseCases, InitiateCollectionInput},
            subscription::{SubscriptionUseCases, billing_dates},
        },
    },
    domain::entities::{
        subscription::{PaymentMethod, PricingTier, SubscriptionInfo},
        transaction::{TransactionRecord, TransactionStatus},
    },
    infra::{
        config::AppConfig, dummy_gateway::DummyGatewayClient, rate_limit::CooldownLimiter,
    },
};

/// Create a pending test transaction with sensible defaults.
pub fn create_test_transaction(
    overrides: impl FnOnce(&mut TransactionRecord),
) -> TransactionRecord {
    let mut record = TransactionRecord {
        id: Uuid::new_v4(),
        reference: "REF-TESTTESTTEST".to_string(),
        phone_number: Some("+256700000000".to_string()),
        card_number: None,
        amount: 15.0,
        currency: "USD".to_string(),
        method: PaymentMethod::MobileMoney,
        tier: PricingTier::Growth,
        status: TransactionStatus::Pending,
        timestamp: Utc::now(),
        signature_verified: true,
    };
    overrides(&mut record);
    record
}

/// Create an active test subscription with sensible defaults.
pub fn create_test_subscription(
    overrides: impl FnOnce(&mut SubscriptionInfo),
) -> SubscriptionInfo {
    let (expiry_date, grace_date) = billing_dates(Utc::now());
    let mut info = SubscriptionInfo {
        tier: PricingTier::Starter,
        method: PaymentMethod::MobileMoney,
        expiry_date,
        grace_date,
        is_trial: false,
    };
    overrides(&mut info);
    info
}

/// Collection input as the dashboard client would send it.
pub fn test_collection_input(
    overrides: impl FnOnce(&mut InitiateCollectionInput),
) -> InitiateCollectionInput {
    let mut input = InitiateCollectionInput {
        phone_number: Some("+256700000000".to_string()),
        card_number: None,
        amount: 15.0,
        currency: "USD".to_string(),
        method: PaymentMethod::MobileMoney,
        tier: PricingTier::Growth,
    };
    overrides(&mut input);
    input
}

/// Collection workflow wired against in-memory storage and a zero-latency
/// gateway, with a 5 s cool-down matching the reference behavior.
pub fn test_collection_use_cases(
    webhook_delay: Duration,
) -> (Arc<CollectionUseCases>, Arc<InMemoryBlobStore>) {
    let blobs = Arc::new(InMemoryBlobStore::new());
    let store: Arc<dyn BlobStore> = blobs.clone();
    let workflow = Arc::new(CollectionUseCases::new(
        Arc::new(TransactionStore::new(store.clone())),
        Arc::new(EventLog::new(store)),
        Arc::new(DummyGatewayClient::new(Duration::ZERO)),
        Arc::new(CooldownLimiter::new(Duration::from_secs(5))),
        webhook_delay,
    ));
    (workflow, blobs)
}

/// Full application state over in-memory storage for route-level tests.
///
/// The cool-down is configurable so most tests can disable it.
pub fn test_app_state(cooldown: Duration, webhook_delay: Duration) -> AppState {
    let blobs: Arc<dyn BlobStore> = Arc::new(InMemoryBlobStore::new());
    let transactions = Arc::new(TransactionStore::new(blobs.clone()));
    let event_log = Arc::new(EventLog::new(blobs.clone()));
    let subscription_store = Arc::new(SubscriptionStore::new(blobs));

    let collections = Arc::new(CollectionUseCases::new(
        transactions.clone(),
        event_log.clone(),
        Arc::new(DummyGatewayClient::new(Duration::ZERO)),
        Arc::new(CooldownLimiter::new(cooldown)),
        webhook_delay,
    ));
    let admin = Arc::new(AdminUseCases::new(transactions.clone(), event_log.clone()));
    let subscriptions = Arc::new(SubscriptionUseCases::new(
        subscription_store,
        event_log.clone(),
    ));

    AppState {
        config: Arc::new(test_config()),
        collections,
        admin,
        subscriptions,
        transactions,
        event_log,
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: "http://localhost:3000".parse().unwrap(),
        redis_url: "redis://127.0.0.1:6379".to_string(),
        static_dir: "./dist".to_string(),
        rate_limit_cooldown: Duration::from_secs(5),
        gateway_latency: Duration::ZERO,
        webhook_delay: Duration::from_millis(2_000),
        entitlement_poll: Duration::from_secs(15),
    }
}
