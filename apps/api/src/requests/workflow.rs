use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::notification::NotificationKind;
use crate::models::request::{FacultyRequest, RequestStatus, RequestType};
use crate::store::{new_id, Store};
use crate::validation::FieldErrors;

pub const MIN_REASON_LEN: usize = 10;

/// Status filter accepted by the listing endpoint; `all` disables it.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    fn admits(&self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == RequestStatus::Pending,
            StatusFilter::Approved => status == RequestStatus::Approved,
            StatusFilter::Rejected => status == RequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub teacher_id: String,
    pub teacher_name: String,
    pub request_type: RequestType,
    pub date: String,
    pub reason: String,
    #[serde(default)]
    pub affected_classes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Approve,
    Reject { note: Option<String> },
}

impl Decision {
    fn target(&self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject { .. } => RequestStatus::Rejected,
        }
    }
}

/// Case-insensitive match on teacher name or reason, combined with the status filter.
pub fn matches(request: &FacultyRequest, query: &RequestQuery) -> bool {
    let matches_search = match query.search.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(term) => {
            let term = term.to_lowercase();
            request.teacher_name.to_lowercase().contains(&term)
                || request.reason.to_lowercase().contains(&term)
        }
    };
    matches_search && query.status.admits(request.status)
}

pub fn compute_stats(requests: &[FacultyRequest]) -> RequestStats {
    let count = |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();
    RequestStats {
        total: requests.len(),
        pending: count(RequestStatus::Pending),
        approved: count(RequestStatus::Approved),
        rejected: count(RequestStatus::Rejected),
    }
}

pub async fn list_requests(store: &Store, query: &RequestQuery) -> Vec<FacultyRequest> {
    store
        .requests
        .read()
        .await
        .iter()
        .filter(|r| matches(r, query))
        .cloned()
        .collect()
}

pub async fn request_stats(store: &Store) -> RequestStats {
    compute_stats(&store.requests.read().await)
}

pub async fn submit_request(store: &Store, req: SubmitRequest) -> Result<FacultyRequest, AppError> {
    let mut errs = FieldErrors::new();
    errs.required("teacher_id", &req.teacher_id, "Teacher ID is required");
    errs.required("teacher_name", &req.teacher_name, "Teacher name is required");
    let date = errs.date("date", &req.date);
    errs.min_len(
        "reason",
        &req.reason,
        MIN_REASON_LEN,
        "Please provide a detailed reason (minimum 10 characters)",
    );
    AppError::check_fields(errs.into_inner())?;

    let request = FacultyRequest {
        id: new_id(),
        teacher_id: req.teacher_id.trim().to_string(),
        teacher_name: req.teacher_name.trim().to_string(),
        request_type: req.request_type,
        date: date.unwrap_or_default(),
        reason: req.reason.trim().to_string(),
        status: RequestStatus::Pending,
        submitted_at: Utc::now(),
        affected_classes: req.affected_classes,
        decision_note: None,
    };

    store.requests.write().await.push(request.clone());
    info!(
        "Request {} submitted by {} for {}",
        request.id, request.teacher_id, request.date
    );

    store
        .notifications
        .push(
            "Request Submitted",
            "Your request has been submitted successfully and is pending approval.",
            NotificationKind::Success,
        )
        .await;

    Ok(request)
}

/// Moves a pending request to approved or rejected.
/// Requests that already left `pending` are never transitioned again.
pub async fn decide(store: &Store, id: &str, decision: Decision) -> Result<FacultyRequest, AppError> {
    let updated = {
        let mut requests = store.requests.write().await;
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Request {id} not found")))?;

        if request.status.is_terminal() {
            warn!(
                "Refused to move request {id} from {} to {}",
                request.status.as_str(),
                decision.target().as_str()
            );
            return Err(AppError::Conflict(format!(
                "Request {id} is already {}",
                request.status.as_str()
            )));
        }

        request.status = decision.target();
        if let Decision::Reject { note } = &decision {
            request.decision_note = note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string);
        }
        request.clone()
    };

    info!("Request {id} {}", updated.status.as_str());

    let (title, message, kind) = match decision {
        Decision::Approve => (
            "Request Approved",
            "Faculty request has been approved successfully.",
            NotificationKind::Success,
        ),
        Decision::Reject { .. } => (
            "Request Rejected",
            "Faculty request has been rejected.",
            NotificationKind::Info,
        ),
    };
    store.notifications.push(title, message, kind).await;

    Ok(updated)
}
