use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::latency;
use crate::models::request::FacultyRequest;
use crate::requests::workflow::{
    decide, list_requests, request_stats, submit_request, Decision, RequestQuery, RequestStats,
    SubmitRequest,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectBody {
    #[serde(default)]
    pub note: Option<String>,
}

/// GET /api/v1/requests
pub async fn handle_list_requests(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RequestQuery>,
) -> Json<Vec<FacultyRequest>> {
    state.latency.simulate(latency::REQUESTS_MS).await;
    Json(list_requests(&state.store, &query).await)
}

/// GET /api/v1/requests/stats
pub async fn handle_request_stats(State(state): State<AppState>) -> Json<RequestStats> {
    Json(request_stats(&state.store).await)
}

/// POST /api/v1/requests
pub async fn handle_submit_request(
    State(state): State<AppState>,
    AppJson(req): AppJson<SubmitRequest>,
) -> Result<(StatusCode, Json<FacultyRequest>), AppError> {
    state.latency.simulate(latency::SUBMIT_REQUEST_MS).await;
    let created = submit_request(&state.store, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/v1/requests/:id/approve
pub async fn handle_approve_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FacultyRequest>, AppError> {
    Ok(Json(decide(&state.store, &id, Decision::Approve).await?))
}

/// POST /api/v1/requests/:id/reject
///
/// The body is optional; `{"note": "..."}` records a reason for the rejection.
pub async fn handle_reject_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<RejectBody>>,
) -> Result<Json<FacultyRequest>, AppError> {
    let note = body.and_then(|Json(b)| b.note);
    Ok(Json(
        decide(&state.store, &id, Decision::Reject { note }).await?,
    ))
}
