use std::sync::Arc;

use uuid::Uuid;

use crate::{
    adapters::persistence::{event_log::EventLog, transaction::TransactionStore},
    app_error::{AppError, AppResult},
    domain::entities::{
        system_log::LogLevel,
        transaction::{TransactionRecord, TransactionStatus},
    },
};

/// Manual state transition applied by an operator.
#[derive(Debug, Clone, Copy)]
enum AdminAction {
    Activate,
    Refund,
}

impl AdminAction {
    fn target_status(self) -> TransactionStatus {
        match self {
            AdminAction::Activate => TransactionStatus::Completed,
            AdminAction::Refund => TransactionStatus::Refunded,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            AdminAction::Activate => "activate",
            AdminAction::Refund => "refund",
        }
    }
}

/// Operator overrides for settlement recovery.
///
/// These bypass the rate limiter and the collection workflow entirely; they
/// exist for support recovery when the simulated webhook never arrives.
/// Unlike webhook confirmation they apply unconditionally, regardless of the
/// record's prior status. An unknown id is an error, not a silent no-op.
pub struct AdminUseCases {
    transactions: Arc<TransactionStore>,
    event_log: Arc<EventLog>,
}

impl AdminUseCases {
    pub fn new(transactions: Arc<TransactionStore>, event_log: Arc<EventLog>) -> Self {
        Self {
            transactions,
            event_log,
        }
    }

    /// Force a settlement attempt to `completed`.
    pub async fn force_activate(&self, id: Uuid) -> AppResult<TransactionRecord> {
        self.apply(id, AdminAction::Activate).await
    }

    /// Mark a settlement attempt as `refunded`.
    pub async fn refund(&self, id: Uuid) -> AppResult<TransactionRecord> {
        self.apply(id, AdminAction::Refund).await
    }

    async fn apply(&self, id: Uuid, action: AdminAction) -> AppResult<TransactionRecord> {
        let updated = self
            .transactions
            .update(id, |t| t.status = action.target_status())
            .await?;

        let Some(record) = updated else {
            self.event_log
                .append(
                    "ADMIN_OVERRIDE_REJECTED",
                    format!("Manual {} refused: unknown TX {id}", action.verb()),
                    LogLevel::Warn,
                )
                .await?;
            return Err(AppError::NotFound);
        };

        self.event_log
            .append(
                "ADMIN_OVERRIDE",
                format!("Manual {} for TX {id}", action.verb()),
                LogLevel::Warn,
            )
            .await?;
        tracing::warn!(transaction_id = %id, action = action.verb(), "Admin override applied");

        Ok(record)
    }
}
