use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::notification::Notification;
use crate::state::AppState;

/// GET /api/v1/notifications
pub async fn handle_list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.store.notifications.list().await)
}

/// DELETE /api/v1/notifications/:id
pub async fn handle_dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.notifications.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
