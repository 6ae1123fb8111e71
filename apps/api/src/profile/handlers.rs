use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::latency;
use crate::models::user::User;
use crate::profile::{
    change_password, get_user, update_profile, PasswordChange, PasswordChanged, ProfileUpdate,
};
use crate::state::AppState;

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    Ok(Json(get_user(&state.store, &id).await?))
}

/// PUT /api/v1/users/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<Json<User>, AppError> {
    state.latency.simulate(latency::PROFILE_UPDATE_MS).await;
    Ok(Json(update_profile(&state.store, &id, &update).await?))
}

/// POST /api/v1/users/:id/password
pub async fn handle_change_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(change): AppJson<PasswordChange>,
) -> Result<Json<PasswordChanged>, AppError> {
    state.latency.simulate(latency::PASSWORD_CHANGE_MS).await;
    Ok(Json(change_password(&state.store, &id, &change).await?))
}
