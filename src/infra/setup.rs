use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

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
            admin::AdminUseCases, collection::CollectionUseCases,
            subscription::SubscriptionUseCases,
        },
    },
    infra::{
        config::AppConfig, dummy_gateway::DummyGatewayClient, rate_limit::CooldownLimiter,
        redis_blob_store::RedisBlobStore,
    },
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let blobs: Arc<dyn BlobStore> = Arc::new(RedisBlobStore::connect(&config.redis_url).await?);

    let transactions = Arc::new(TransactionStore::new(blobs.clone()));
    let event_log = Arc::new(EventLog::new(blobs.clone()));
    let subscription_store = Arc::new(SubscriptionStore::new(blobs));

    let gateway = Arc::new(DummyGatewayClient::new(config.gateway_latency));
    let rate_limiter = Arc::new(CooldownLimiter::new(config.rate_limit_cooldown));

    let collections = Arc::new(CollectionUseCases::new(
        transactions.clone(),
        event_log.clone(),
        gateway,
        rate_limiter,
        config.webhook_delay,
    ));
    let admin = Arc::new(AdminUseCases::new(transactions.clone(), event_log.clone()));
    let subscriptions = Arc::new(SubscriptionUseCases::new(
        subscription_store,
        event_log.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        collections,
        admin,
        subscriptions,
        transactions,
        event_log,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "smallbiz_billing=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
