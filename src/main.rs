use dotenvy::dotenv;
use tracing::info;

use smallbiz_billing::infra::{
    InfraError, app::create_app, entitlement_watcher::run_entitlement_watch_loop,
    setup::init_app_state,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let app_state = init_app_state().await?;

    let bind_addr = app_state.config.bind_addr;

    let app = create_app(app_state.clone());

    // Spawn the entitlement poller (after tracing is initialized).
    let subscriptions = app_state.subscriptions.clone();
    let poll_interval = app_state.config.entitlement_poll;
    tokio::spawn(async move {
        run_entitlement_watch_loop(subscriptions, poll_interval).await;
    });

    // Drain workflow notifications into the structured log.
    let mut events = app_state.collections.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(?event, "Collection event");
        }
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!("Billing service listening at {}", &listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
