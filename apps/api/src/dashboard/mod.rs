use axum::{extract::State, Json};

use crate::extract::AppPath;
use crate::fixtures::dashboard_stats;
use crate::latency;
use crate::models::dashboard::DashboardStats;
use crate::models::user::Role;
use crate::state::AppState;

/// GET /api/v1/dashboard/:role
///
/// Headline numbers and weekly activity for the role's landing page.
pub async fn handle_dashboard_stats(
    State(state): State<AppState>,
    AppPath(role): AppPath<Role>,
) -> Json<DashboardStats> {
    state.latency.simulate(latency::DASHBOARD_MS).await;
    Json(dashboard_stats(role))
}
