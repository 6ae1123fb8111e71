use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::latency;
use crate::models::notification::NotificationKind;
use crate::models::timetable::Timetable;
use crate::state::AppState;
use crate::timetable::clash::{ClashCheckRequest, ClashReport};
use crate::timetable::export::ExportFormat;
use crate::timetable::generator::{generate_options, GenerateRequest, GeneratedTimetableOption};
use crate::timetable::session::{
    create_session, select_option, start_export, ExportTicket, GenerationSession,
};
use crate::timetable::{
    delete_timetable, export_timetable, filter_timetables, get_timetable, TimetableExportTicket,
    TimetableQuery,
};

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub options: Vec<GeneratedTimetableOption>,
}

#[derive(Debug, Deserialize)]
pub struct SelectOptionRequest {
    pub option_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
}

/// GET /api/v1/timetables
pub async fn handle_list_timetables(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TimetableQuery>,
) -> Json<Vec<Timetable>> {
    state.latency.simulate(latency::TIMETABLES_MS).await;
    Json(filter_timetables(&state.store.timetables.read().await, &query))
}

/// GET /api/v1/timetables/:id
pub async fn handle_get_timetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Timetable>, AppError> {
    state.latency.simulate(latency::TIMETABLES_MS).await;
    Ok(Json(get_timetable(&state.store, &id).await?))
}

/// DELETE /api/v1/timetables/:id
pub async fn handle_delete_timetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.latency.simulate(latency::DELETE_TIMETABLE_MS).await;
    delete_timetable(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/timetables/:id/export
pub async fn handle_export_timetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<ExportRequest>,
) -> Result<(StatusCode, Json<TimetableExportTicket>), AppError> {
    let ticket = export_timetable(state.store.clone(), state.latency, &id, req.format).await?;
    Ok((StatusCode::ACCEPTED, Json(ticket)))
}

/// POST /api/v1/timetables/generate
///
/// Validates the form, lays out the weekly grid and returns the three options
/// under a new generation id.
pub async fn handle_generate(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let lunch_start = request.validate()?;

    state.latency.simulate(latency::GENERATE_MS).await;
    let options = generate_options(&request.subjects, lunch_start);
    let session =
        create_session(&state.store, &request.branch, request.semester, options).await;
    info!(
        "Generated {} options for {} semester {} ({} subjects)",
        session.options.len(),
        session.branch,
        session.semester,
        request.subjects.len()
    );

    state
        .store
        .notifications
        .push(
            "Timetables Generated",
            format!(
                "{} timetable options are ready for you to choose from.",
                session.options.len()
            ),
            NotificationKind::Success,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(GenerateResponse {
            generation_id: session.id,
            options: session.options,
        }),
    ))
}

/// POST /api/v1/timetables/generations/:id/select
pub async fn handle_select_option(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<SelectOptionRequest>,
) -> Result<Json<GenerationSession>, AppError> {
    Ok(Json(select_option(&state.store, id, &req.option_id).await?))
}

/// POST /api/v1/timetables/generations/:id/export
///
/// Returns 202: the export "completes" later via the notification feed.
pub async fn handle_export(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<ExportRequest>,
) -> Result<(StatusCode, Json<ExportTicket>), AppError> {
    let ticket = start_export(state.store.clone(), state.latency, id, req.format).await?;
    Ok((StatusCode::ACCEPTED, Json(ticket)))
}

/// POST /api/v1/timetables/clash-check
pub async fn handle_clash_check(
    State(state): State<AppState>,
    AppJson(req): AppJson<ClashCheckRequest>,
) -> Result<Json<ClashReport>, AppError> {
    state.latency.simulate(latency::CLASH_CHECK_MS).await;
    let report = state.clash_checker.check(&req.slot).await?;
    info!(
        "Clash check ({}) for {} {} in {}: {}",
        state.clash_checker.backend(),
        req.slot.day,
        req.slot.time,
        req.timetable_id.as_deref().unwrap_or("draft"),
        if report.has_clash { "clash" } else { "clear" }
    );
    Ok(Json(report))
}
