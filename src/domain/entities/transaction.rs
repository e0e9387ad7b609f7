use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use super::subscription::{PaymentMethod, PricingTier};

/// Status of a settlement attempt.
///
/// A record starts `pending` and moves to `completed` via webhook
/// confirmation or an admin force-activate, or to `refunded` via an admin
/// refund. `failed` exists in the stored vocabulary but no current code path
/// writes it; a confirmation failure leaves the record `pending`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[derive(Default)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl TransactionStatus {
    /// Whether funds were successfully drawn for this attempt
    pub fn is_settled(&self) -> bool {
        matches!(self, TransactionStatus::Completed)
    }

    /// Whether the attempt is still awaiting a gateway outcome
    pub fn is_pending(&self) -> bool {
        matches!(self, TransactionStatus::Pending)
    }

    /// Terminal states are never advanced by webhook confirmation
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Completed | TransactionStatus::Refunded
        )
    }
}

/// One settlement attempt against the payment gateway.
///
/// Records are append-only: payment attributes and `timestamp` are immutable
/// after creation, only `status` changes. Card numbers are stored masked to
/// the last four digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    /// Opaque external reference issued by the gateway
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub method: PaymentMethod,
    pub tier: PricingTier,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
    pub signature_verified: bool,
}

/// Mask a card number down to its last four digits for storage.
pub fn mask_card_number(card: &str) -> String {
    let digits: String = card.chars().filter(|c| c.is_ascii_digit()).collect();
    let last4 = if digits.len() >= 4 {
        &digits[digits.len() - 4..]
    } else {
        digits.as_str()
    };
    format!("**** **** **** {last4}")
}
