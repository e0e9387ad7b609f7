use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

/// POST /api/admin/transactions/{id}/activate
/// Force-settles a transaction regardless of its prior status.
async fn force_activate(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let record = app_state.admin.force_activate(id).await?;
    Ok(Json(record))
}

/// POST /api/admin/transactions/{id}/refund
async fn refund(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let record = app_state.admin.refund(id).await?;
    Ok(Json(record))
}

/// GET /api/admin/logs
/// Audit log, newest first, bounded to the ring capacity.
async fn list_logs(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = app_state.event_log.entries().await?;
    Ok(Json(entries))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transactions/{id}/activate", post(force_activate))
        .route("/transactions/{id}/refund", post(refund))
        .route("/logs", get(list_logs))
}
