use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{
    adapters::persistence::{event_log::EventLog, subscription::SubscriptionStore},
    app_error::AppResult,
    domain::entities::{
        subscription::{EntitlementStatus, PaymentMethod, PricingTier, SubscriptionInfo},
        system_log::LogLevel,
    },
};

/// Paid (and trial) subscription period.
pub const SUBSCRIPTION_PERIOD_DAYS: i64 = 30;
/// Overdue window after nominal expiry during which access is still granted.
pub const GRACE_PERIOD_DAYS: i64 = 2;

/// Map the subscription dates to an entitlement.
///
/// Pure and deterministic: the three intervals partition the timeline with
/// no gaps. `now == expiry` is still active, `now == grace` is still grace.
pub fn evaluate(
    now: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
    grace_date: DateTime<Utc>,
) -> EntitlementStatus {
    if now > grace_date {
        EntitlementStatus::Expired
    } else if now > expiry_date {
        EntitlementStatus::Grace
    } else {
        EntitlementStatus::Active
    }
}

/// Expiry and grace dates for a subscription granted at `start`.
pub fn billing_dates(start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let expiry = start + Duration::days(SUBSCRIPTION_PERIOD_DAYS);
    let grace = expiry + Duration::days(GRACE_PERIOD_DAYS);
    (expiry, grace)
}

/// Subscription record plus its entitlement derived at read time.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionSnapshot {
    #[serde(flatten)]
    pub info: SubscriptionInfo,
    pub status: EntitlementStatus,
}

/// Subscription lifecycle operations and the entitlement poll step.
pub struct SubscriptionUseCases {
    store: Arc<SubscriptionStore>,
    event_log: Arc<EventLog>,
}

impl SubscriptionUseCases {
    pub fn new(store: Arc<SubscriptionStore>, event_log: Arc<EventLog>) -> Self {
        Self { store, event_log }
    }

    /// Grant the initial 30-day trial at onboarding.
    pub async fn start_trial(
        &self,
        tier: PricingTier,
        method: PaymentMethod,
    ) -> AppResult<SubscriptionSnapshot> {
        let info = self.grant(tier, method, true).await?;
        self.event_log
            .append(
                "TRIAL_GRANTED",
                format!("{} trial active until {}", info.tier, info.expiry_date),
                LogLevel::Info,
            )
            .await?;
        Ok(self.snapshot(info))
    }

    /// Record a paid (re)subscription after a settled collection.
    pub async fn activate(
        &self,
        tier: PricingTier,
        method: PaymentMethod,
    ) -> AppResult<SubscriptionSnapshot> {
        let info = self.grant(tier, method, false).await?;
        self.event_log
            .append(
                "SUBSCRIPTION_ACTIVATED",
                format!("{} plan renewed until {}", info.tier, info.expiry_date),
                LogLevel::Info,
            )
            .await?;
        Ok(self.snapshot(info))
    }

    /// Current subscription with its derived status, if one exists.
    pub async fn status(&self) -> AppResult<Option<SubscriptionSnapshot>> {
        Ok(self.store.get().await?.map(|info| self.snapshot(info)))
    }

    /// One tick of the entitlement poller.
    ///
    /// Recomputes the derived status and, when it differs from the last
    /// observed one, records the transition in the audit log. Never mutates
    /// the subscription dates. Returns the freshly derived status, or `None`
    /// when nothing changed (or no subscription exists yet).
    pub async fn poll_transition(
        &self,
        last_seen: &mut Option<EntitlementStatus>,
    ) -> AppResult<Option<EntitlementStatus>> {
        let Some(info) = self.store.get().await? else {
            return Ok(None);
        };
        let status = evaluate(Utc::now(), info.expiry_date, info.grace_date);
        if *last_seen == Some(status) {
            return Ok(None);
        }

        let previous = last_seen.replace(status);
        if let Some(previous) = previous {
            let level = match status {
                EntitlementStatus::Active => LogLevel::Info,
                EntitlementStatus::Grace => LogLevel::Warn,
                EntitlementStatus::Expired => LogLevel::Error,
            };
            self.event_log
                .append(
                    "SUBSCRIPTION_STATE_CHANGE",
                    format!("Entitlement moved from {previous} to {status}"),
                    level,
                )
                .await?;
            tracing::info!(%previous, current = %status, "Entitlement transition");
        }
        Ok(Some(status))
    }

    async fn grant(
        &self,
        tier: PricingTier,
        method: PaymentMethod,
        is_trial: bool,
    ) -> AppResult<SubscriptionInfo> {
        let (expiry_date, grace_date) = billing_dates(Utc::now());
        let info = SubscriptionInfo {
            tier,
            method,
            expiry_date,
            grace_date,
            is_trial,
        };
        self.store.put(&info).await?;
        Ok(info)
    }

    fn snapshot(&self, info: SubscriptionInfo) -> SubscriptionSnapshot {
        let status = evaluate(Utc::now(), info.expiry_date, info.grace_date);
        SubscriptionSnapshot { info, status }
    }
}
