pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::catalog::handlers as catalog;
use crate::dashboard;
use crate::notifications::handlers as notifications;
use crate::profile::handlers as profile;
use crate::requests::handlers as requests;
use crate::state::AppState;
use crate::timetable::handlers as timetable;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route(
            "/api/v1/auth/forgot-password",
            post(auth::handle_forgot_password),
        )
        .route(
            "/api/v1/auth/forgot-password/verify",
            post(auth::handle_verify_code),
        )
        .route(
            "/api/v1/auth/forgot-password/reset",
            post(auth::handle_reset_password),
        )
        // Accounts
        .route("/api/v1/users/:id", get(profile::handle_get_user))
        .route(
            "/api/v1/users/:id/profile",
            put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/users/:id/password",
            post(profile::handle_change_password),
        )
        // Dashboards
        .route(
            "/api/v1/dashboard/:role",
            get(dashboard::handle_dashboard_stats),
        )
        // Faculty requests
        .route(
            "/api/v1/requests",
            get(requests::handle_list_requests).post(requests::handle_submit_request),
        )
        .route("/api/v1/requests/stats", get(requests::handle_request_stats))
        .route(
            "/api/v1/requests/:id/approve",
            post(requests::handle_approve_request),
        )
        .route(
            "/api/v1/requests/:id/reject",
            post(requests::handle_reject_request),
        )
        // Catalog
        .route(
            "/api/v1/subjects",
            get(catalog::handle_list_subjects).post(catalog::handle_add_subject),
        )
        .route(
            "/api/v1/subjects/by-department",
            get(catalog::handle_subjects_by_department),
        )
        .route(
            "/api/v1/faculty",
            get(catalog::handle_list_faculty).post(catalog::handle_add_faculty),
        )
        .route("/api/v1/faculty/stats", get(catalog::handle_faculty_stats))
        .route("/api/v1/teachers", get(catalog::handle_list_teachers))
        .route("/api/v1/exams", get(catalog::handle_list_exams))
        // Timetables
        .route("/api/v1/timetables", get(timetable::handle_list_timetables))
        .route(
            "/api/v1/timetables/generate",
            post(timetable::handle_generate),
        )
        .route(
            "/api/v1/timetables/clash-check",
            post(timetable::handle_clash_check),
        )
        .route(
            "/api/v1/timetables/generations/:id/select",
            post(timetable::handle_select_option),
        )
        .route(
            "/api/v1/timetables/generations/:id/export",
            post(timetable::handle_export),
        )
        .route(
            "/api/v1/timetables/:id",
            get(timetable::handle_get_timetable).delete(timetable::handle_delete_timetable),
        )
        .route(
            "/api/v1/timetables/:id/export",
            post(timetable::handle_export_timetable),
        )
        // Notifications
        .route(
            "/api/v1/notifications",
            get(notifications::handle_list_notifications),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(notifications::handle_dismiss_notification),
        )
        .with_state(state)
}
