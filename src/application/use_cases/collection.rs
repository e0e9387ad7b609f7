use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use tokio::sync::{broadcast, oneshot};
use uuid::Uuid;

use crate::{
    adapters::persistence::{event_log::EventLog, transaction::TransactionStore},
    app_error::{AppError, AppResult},
    application::ports::payment_gateway::{CollectionRequest, PaymentGatewayPort},
    domain::entities::{
        subscription::{PaymentMethod, PricingTier},
        system_log::LogLevel,
        transaction::{TransactionRecord, TransactionStatus, mask_card_number},
    },
    infra::rate_limit::CooldownLimiter,
};

/// Buffered capacity of the workflow event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Caller input for starting a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiateCollectionInput {
    pub phone_number: Option<String>,
    pub card_number: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub tier: PricingTier,
}

/// Workflow notifications delivered to observers over a broadcast channel.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// The simulated webhook confirmed settlement of this attempt.
    Settled(TransactionRecord),
    /// The caller stopped watching a pending attempt before confirmation.
    Abandoned { transaction_id: Uuid },
}

/// Orchestrates the initiate -> webhook-confirm -> completion flow.
///
/// Each initiation spawns one task that delivers the simulated webhook after
/// a delay. The task races an explicit cancellation signal so `abandon` can
/// stop the pending mutation before it fires; without either, the record
/// stays `pending` forever and only an admin override can move it on.
#[derive(Clone)]
pub struct CollectionUseCases {
    transactions: Arc<TransactionStore>,
    event_log: Arc<EventLog>,
    gateway: Arc<dyn PaymentGatewayPort>,
    rate_limiter: Arc<CooldownLimiter>,
    webhook_delay: Duration,
    events: broadcast::Sender<CollectionEvent>,
    pending: Arc<Mutex<HashMap<Uuid, oneshot::Sender<()>>>>,
}

impl CollectionUseCases {
    pub fn new(
        transactions: Arc<TransactionStore>,
        event_log: Arc<EventLog>,
        gateway: Arc<dyn PaymentGatewayPort>,
        rate_limiter: Arc<CooldownLimiter>,
        webhook_delay: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            transactions,
            event_log,
            gateway,
            rate_limiter,
            webhook_delay,
            events,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Subscribe to settlement notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<CollectionEvent> {
        self.events.subscribe()
    }

    /// Start a collection attempt.
    ///
    /// Creates a `pending` record, schedules the simulated webhook and
    /// returns the record. Fails with `RateLimited` when called again within
    /// the cool-down window.
    pub async fn initiate(&self, input: InitiateCollectionInput) -> AppResult<TransactionRecord> {
        self.event_log
            .append(
                "GATEWAY_COLLECTION_INIT",
                format!(
                    "Requesting {} settlement: {} {}",
                    input.method, input.currency, input.amount
                ),
                LogLevel::Info,
            )
            .await?;

        if input.amount <= 0.0 {
            return Err(AppError::InvalidInput(
                "amount must be positive".to_string(),
            ));
        }

        if let Err(err) = self.rate_limiter.check_and_record() {
            self.event_log
                .append(
                    "SECURITY_RATE_LIMIT",
                    "Spam protection triggered for collection request",
                    LogLevel::Warn,
                )
                .await?;
            return Err(err);
        }

        let request = CollectionRequest {
            phone_number: input.phone_number.clone(),
            card_number: input.card_number.clone(),
            amount: input.amount,
            currency: input.currency.clone(),
            method: input.method,
            tier: input.tier,
        };
        let receipt = self.gateway.initiate_collection(&request).await?;

        let record = TransactionRecord {
            id: Uuid::new_v4(),
            reference: receipt.reference,
            phone_number: input.phone_number,
            card_number: input.card_number.as_deref().map(mask_card_number),
            amount: input.amount,
            currency: input.currency,
            method: input.method,
            tier: input.tier,
            status: TransactionStatus::Pending,
            timestamp: Utc::now(),
            signature_verified: true,
        };
        self.transactions.prepend(&record).await?;

        tracing::info!(
            transaction_id = %record.id,
            reference = %record.reference,
            "Collection initiated, awaiting gateway confirmation"
        );

        self.spawn_webhook_delivery(record.id);
        Ok(record)
    }

    /// Webhook confirmation step.
    ///
    /// Unknown ids are treated as possible forgeries: logged at error level
    /// and rejected with `NotFound`. Confirming an already-completed
    /// transaction returns it unchanged without a duplicate settlement log.
    pub async fn confirm(&self, transaction_id: Uuid) -> AppResult<TransactionRecord> {
        self.event_log
            .append(
                "GATEWAY_IPN_RECEIVED",
                format!("Settlement notification received for TX {transaction_id}"),
                LogLevel::Info,
            )
            .await?;

        let Some(existing) = self.transactions.get(transaction_id).await? else {
            self.event_log
                .append(
                    "WEBHOOK_FORGERY_ALERT",
                    format!("Unrecognized transaction id: {transaction_id}"),
                    LogLevel::Error,
                )
                .await?;
            return Err(AppError::NotFound);
        };

        if existing.status == TransactionStatus::Completed {
            return Ok(existing);
        }

        let updated = self
            .transactions
            .update(transaction_id, |t| {
                t.status = TransactionStatus::Completed;
            })
            .await?
            .ok_or(AppError::NotFound)?;

        self.event_log
            .append(
                "GATEWAY_SETTLEMENT_SUCCESS",
                format!("TX {transaction_id} settled via {}", updated.method),
                LogLevel::Info,
            )
            .await?;

        let _ = self.events.send(CollectionEvent::Settled(updated.clone()));
        Ok(updated)
    }

    /// Stop watching a pending attempt and cancel its simulated webhook.
    ///
    /// The record itself stays `pending`; recovering it is an admin concern.
    pub async fn abandon(&self, transaction_id: Uuid) -> AppResult<()> {
        let cancel = self.pending.lock().unwrap().remove(&transaction_id);
        let Some(cancel) = cancel else {
            return Err(AppError::NotFound);
        };
        let _ = cancel.send(());

        self.event_log
            .append(
                "COLLECTION_ABANDONED",
                format!("Caller abandoned TX {transaction_id}; record remains pending"),
                LogLevel::Warn,
            )
            .await?;
        let _ = self.events.send(CollectionEvent::Abandoned { transaction_id });
        Ok(())
    }

    /// One task per attempt: wait out the gateway round-trip, then deliver
    /// the webhook unless the attempt was abandoned first.
    fn spawn_webhook_delivery(&self, transaction_id: Uuid) {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .insert(transaction_id, cancel_tx);

        let workflow = self.clone();
        tokio::spawn(async move {
            let deliver = tokio::select! {
                _ = tokio::time::sleep(workflow.webhook_delay) => true,
                _ = cancel_rx => false,
            };
            workflow.pending.lock().unwrap().remove(&transaction_id);

            if !deliver {
                tracing::debug!(%transaction_id, "Webhook delivery cancelled");
                return;
            }
            if let Err(err) = workflow.confirm(transaction_id).await {
                tracing::warn!(
                    %transaction_id,
                    error = %err,
                    "Simulated webhook confirmation failed"
                );
            }
        });
    }
}
