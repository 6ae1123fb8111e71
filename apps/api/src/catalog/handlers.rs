use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::catalog::faculty::{
    add_faculty_member, compute_faculty_stats, filter_faculty, FacultyQuery, FacultyStats,
    NewFacultyMember,
};
use crate::catalog::subjects::{
    add_subject, filter_subjects, group_by_department, DepartmentSubjects, NewSubject,
    SubjectQuery,
};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::latency;
use crate::models::academic::{Exam, FacultyMember, Subject, Teacher};
use crate::state::AppState;

/// GET /api/v1/subjects
pub async fn handle_list_subjects(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SubjectQuery>,
) -> Json<Vec<Subject>> {
    state.latency.simulate(latency::SUBJECTS_MS).await;
    Json(filter_subjects(&state.store.subjects.read().await, &query))
}

/// GET /api/v1/subjects/by-department
pub async fn handle_subjects_by_department(
    State(state): State<AppState>,
) -> Json<Vec<DepartmentSubjects>> {
    Json(group_by_department(&state.store.subjects.read().await))
}

/// POST /api/v1/subjects
pub async fn handle_add_subject(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewSubject>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = add_subject(&state.store, new).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

/// GET /api/v1/faculty
pub async fn handle_list_faculty(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FacultyQuery>,
) -> Json<Vec<FacultyMember>> {
    Json(filter_faculty(&state.store.faculty.read().await, &query))
}

/// GET /api/v1/faculty/stats
pub async fn handle_faculty_stats(State(state): State<AppState>) -> Json<FacultyStats> {
    Json(compute_faculty_stats(&state.store.faculty.read().await))
}

/// POST /api/v1/faculty
pub async fn handle_add_faculty(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewFacultyMember>,
) -> Result<(StatusCode, Json<FacultyMember>), AppError> {
    let member = add_faculty_member(&state.store, new).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/teachers
pub async fn handle_list_teachers(State(state): State<AppState>) -> Json<Vec<Teacher>> {
    state.latency.simulate(latency::TEACHERS_MS).await;
    Json(state.store.teachers.clone())
}

/// GET /api/v1/exams
pub async fn handle_list_exams(State(state): State<AppState>) -> Json<Vec<Exam>> {
    state.latency.simulate(latency::EXAMS_MS).await;
    Json(state.store.exams.clone())
}
