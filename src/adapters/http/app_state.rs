use std::sync::Arc;

use crate::{
    adapters::persistence::{event_log::EventLog, transaction::TransactionStore},
    application::use_cases::{
        admin::AdminUseCases, collection::CollectionUseCases, subscription::SubscriptionUseCases,
    },
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub collections: Arc<CollectionUseCases>,
    pub admin: Arc<AdminUseCases>,
    pub subscriptions: Arc<SubscriptionUseCases>,
    pub transactions: Arc<TransactionStore>,
    pub event_log: Arc<EventLog>,
}
