use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Subscription tier chosen at onboarding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[derive(Default)]
pub enum PricingTier {
    #[default]
    Starter,
    Growth,
    Pro,
}

impl PricingTier {
    /// Base monthly price in USD before any local-currency conversion
    pub fn base_usd(&self) -> f64 {
        match self {
            PricingTier::Starter => 5.0,
            PricingTier::Growth => 15.0,
            PricingTier::Pro => 30.0,
        }
    }

    /// Branch count included with this tier
    pub fn branch_limit(&self) -> u32 {
        match self {
            PricingTier::Starter => 1,
            PricingTier::Growth => 3,
            PricingTier::Pro => 5,
        }
    }
}

/// Payment channel used to draw funds.
///
/// Wire names match the strings the dashboard client has always sent, so
/// they carry spaces and slashes rather than snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display)]
pub enum PaymentMethod {
    #[serde(rename = "Xente Wallet")]
    #[strum(serialize = "Xente Wallet")]
    XenteWallet,
    #[serde(rename = "Mobile Money")]
    #[strum(serialize = "Mobile Money")]
    MobileMoney,
    #[serde(rename = "Visa/Mastercard")]
    #[strum(serialize = "Visa/Mastercard")]
    Card,
    #[serde(rename = "Bank Transfer")]
    #[strum(serialize = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Apple/Google Pay")]
    #[strum(serialize = "Apple/Google Pay")]
    DigitalWallet,
}

impl PaymentMethod {
    /// Whether this channel is addressed by a phone number rather than a card
    pub fn uses_phone_number(&self) -> bool {
        matches!(
            self,
            PaymentMethod::MobileMoney | PaymentMethod::XenteWallet
        )
    }
}

/// Entitlement derived from the subscription dates.
///
/// Never stored; recomputed from `(now, expiry_date, grace_date)` on every
/// evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntitlementStatus {
    Active,
    Grace,
    Expired,
}

impl EntitlementStatus {
    /// Whether the account may still use the dashboard
    pub fn has_access(&self) -> bool {
        matches!(self, EntitlementStatus::Active | EntitlementStatus::Grace)
    }

    /// Whether the account is overdue but not yet locked out
    pub fn is_overdue(&self) -> bool {
        matches!(self, EntitlementStatus::Grace)
    }
}

/// One subscription per business account.
///
/// Invariant: `grace_date > expiry_date`. The derived status is not part of
/// this record; see `use_cases::subscription::evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub tier: PricingTier,
    pub method: PaymentMethod,
    pub expiry_date: DateTime<Utc>,
    /// Always `expiry_date` + the grace window
    pub grace_date: DateTime<Utc>,
    /// Initial trial grant vs. paid renewal
    pub is_trial: bool,
}
