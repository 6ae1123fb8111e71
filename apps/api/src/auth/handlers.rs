use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::auth::service::{
    authenticate, register, request_recovery_code, reset_password, verify_recovery_code,
    AuthResponse, LoginRequest, RecoveryCodeRequest, RecoveryEmailRequest, RecoveryResetRequest,
    RecoveryResponse, RegisterForm,
};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::latency;
use crate::models::user::Role;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RoleQuery {
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Student
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    state.latency.simulate(latency::LOGIN_MS).await;
    Ok(Json(authenticate(&req)?))
}

/// POST /api/v1/auth/register?role=
pub async fn handle_register(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RoleQuery>,
    AppJson(form): AppJson<RegisterForm>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    state.latency.simulate(latency::REGISTER_MS).await;
    let response = register(&state.store, params.role, &form).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/forgot-password
pub async fn handle_forgot_password(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecoveryEmailRequest>,
) -> Result<Json<RecoveryResponse>, AppError> {
    state.latency.simulate(latency::FORGOT_PASSWORD_MS).await;
    Ok(Json(request_recovery_code(&req)?))
}

/// POST /api/v1/auth/forgot-password/verify
pub async fn handle_verify_code(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecoveryCodeRequest>,
) -> Result<Json<RecoveryResponse>, AppError> {
    state.latency.simulate(latency::VERIFY_CODE_MS).await;
    Ok(Json(verify_recovery_code(&req)?))
}

/// POST /api/v1/auth/forgot-password/reset
pub async fn handle_reset_password(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecoveryResetRequest>,
) -> Result<Json<RecoveryResponse>, AppError> {
    state.latency.simulate(latency::RESET_PASSWORD_MS).await;
    Ok(Json(reset_password(&req)?))
}
