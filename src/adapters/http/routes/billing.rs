use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::use_cases::collection::InitiateCollectionInput,
    domain::entities::subscription::{PaymentMethod, PricingTier},
};

// ============================================================================
// Types
// ============================================================================

#[derive(Serialize)]
struct InitiateCollectionResponse {
    success: bool,
    transaction_id: Uuid,
    reference: String,
}

#[derive(Deserialize)]
struct GatewayWebhookPayload {
    transaction_id: Uuid,
}

#[derive(Deserialize)]
struct SubscribePayload {
    tier: PricingTier,
    method: PaymentMethod,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/billing/collections
/// Starts a settlement attempt; the simulated webhook confirms it later.
async fn initiate_collection(
    State(app_state): State<AppState>,
    Json(payload): Json<InitiateCollectionInput>,
) -> AppResult<impl IntoResponse> {
    let record = app_state.collections.initiate(payload).await?;
    Ok(Json(InitiateCollectionResponse {
        success: true,
        transaction_id: record.id,
        reference: record.reference,
    }))
}

/// DELETE /api/billing/collections/{id}
/// Stops watching a pending attempt; its record stays pending.
async fn abandon_collection(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    app_state.collections.abandon(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/billing/webhooks/gateway
/// Gateway settlement notification (simulated in this deployment).
async fn gateway_webhook(
    State(app_state): State<AppState>,
    Json(payload): Json<GatewayWebhookPayload>,
) -> AppResult<impl IntoResponse> {
    let record = app_state.collections.confirm(payload.transaction_id).await?;
    Ok(Json(record))
}

/// GET /api/billing/transactions
async fn list_transactions(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let transactions = app_state.transactions.list().await?;
    Ok(Json(transactions))
}

/// GET /api/billing/subscription
/// Subscription record with its entitlement derived at read time.
async fn get_subscription(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    match app_state.subscriptions.status().await? {
        Some(snapshot) => Ok(Json(snapshot)),
        None => Err(AppError::NotFound),
    }
}

/// POST /api/billing/subscription/trial
/// Grants the initial trial at onboarding.
async fn start_trial(
    State(app_state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<impl IntoResponse> {
    let snapshot = app_state
        .subscriptions
        .start_trial(payload.tier, payload.method)
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/billing/subscription
/// Records a paid (re)subscription after a settled collection.
async fn activate_subscription(
    State(app_state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<impl IntoResponse> {
    let snapshot = app_state
        .subscriptions
        .activate(payload.tier, payload.method)
        .await?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collections", post(initiate_collection))
        .route("/collections/{id}", delete(abandon_collection))
        .route("/webhooks/gateway", post(gateway_webhook))
        .route("/transactions", get(list_transactions))
        .route(
            "/subscription",
            get(get_subscription).post(activate_subscription),
        )
        .route("/subscription/trial", post(start_trial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::time::Duration;

    use crate::domain::entities::transaction::TransactionStatus;
    use crate::test_utils::test_app_state;

    fn build_test_server(app_state: AppState) -> TestServer {
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    fn collection_payload() -> Value {
        json!({
            "phone_number": "+256700000000",
            "amount": 15.0,
            "currency": "USD",
            "method": "Mobile Money",
            "tier": "Growth"
        })
    }

    #[tokio::test]
    async fn initiate_collection_returns_transaction_id() {
        let app_state = test_app_state(Duration::ZERO, Duration::from_secs(60));
        let server = build_test_server(app_state);

        let response = server.post("/collections").json(&collection_payload()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["transaction_id"].is_string());
        assert!(body["reference"].as_str().unwrap().starts_with("REF-"));
    }

    #[tokio::test]
    async fn initiate_collection_within_cooldown_returns_429() {
        let app_state = test_app_state(Duration::from_secs(5), Duration::from_secs(60));
        let server = build_test_server(app_state);

        server
            .post("/collections")
            .json(&collection_payload())
            .await
            .assert_status_ok();

        let response = server.post("/collections").json(&collection_payload()).await;
        response.assert_status(StatusCode::TOO_MANY_REQUESTS);

        let body: Value = response.json();
        assert_eq!(body["code"], "RATE_LIMITED");
    }

    #[tokio::test]
    async fn gateway_webhook_unknown_id_returns_404() {
        let app_state = test_app_state(Duration::ZERO, Duration::from_secs(60));
        let server = build_test_server(app_state);

        let response = server
            .post("/webhooks/gateway")
            .json(&json!({ "transaction_id": Uuid::new_v4() }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn gateway_webhook_settles_pending_transaction() {
        let app_state = test_app_state(Duration::ZERO, Duration::from_secs(60));
        let server = build_test_server(app_state.clone());

        let initiated: Value = server
            .post("/collections")
            .json(&collection_payload())
            .await
            .json();
        let transaction_id = initiated["transaction_id"].as_str().unwrap().to_string();

        let response = server
            .post("/webhooks/gateway")
            .json(&json!({ "transaction_id": transaction_id }))
            .await;
        response.assert_status_ok();

        let record: Value = response.json();
        assert_eq!(record["status"], "completed");

        let stored = app_state
            .transactions
            .get(transaction_id.parse().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, TransactionStatus::Completed);
    }

    #[tokio::test]
    async fn subscription_without_onboarding_returns_404() {
        let app_state = test_app_state(Duration::ZERO, Duration::from_secs(60));
        let server = build_test_server(app_state);

        server
            .get("/subscription")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn start_trial_then_get_subscription_returns_active() {
        let app_state = test_app_state(Duration::ZERO, Duration::from_secs(60));
        let server = build_test_server(app_state);

        let response = server
            .post("/subscription/trial")
            .json(&json!({ "tier": "Starter", "method": "Mobile Money" }))
            .await;
        response.assert_status_ok();

        let snapshot: Value = server.get("/subscription").await.json();
        assert_eq!(snapshot["status"], "active");
        assert_eq!(snapshot["is_trial"], true);
        assert_eq!(snapshot["tier"], "Starter");
    }
}
