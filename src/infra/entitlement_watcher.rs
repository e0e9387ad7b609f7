use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{error, info};

use crate::application::use_cases::subscription::SubscriptionUseCases;

/// Background poller re-deriving the entitlement on a fixed interval.
///
/// Each tick recomputes the status from the stored dates; transitions are
/// logged by the use case. The watcher only reads, never writes the dates.
pub async fn run_entitlement_watch_loop(
    subscriptions: Arc<SubscriptionUseCases>,
    poll_interval: Duration,
) {
    let mut ticker = interval(poll_interval);

    info!(
        "Entitlement watcher started (polling every {}s)",
        poll_interval.as_secs()
    );

    let mut last_seen = None;
    loop {
        ticker.tick().await;

        if let Err(e) = subscriptions.poll_transition(&mut last_seen).await {
            error!(error = %e, "Entitlement evaluation failed");
        }
    }
}
