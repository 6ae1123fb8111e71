//! Generation sessions: the option set produced by one generation request,
//! which option the client picked, and the simulated export.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::latency::Latency;
use crate::store::Store;
use crate::timetable::export::{export_file_name, run_export, ExportFormat};
use crate::timetable::generator::GeneratedTimetableOption;

/// Oldest sessions are evicted beyond this many.
pub const MAX_SESSIONS: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSession {
    pub id: Uuid,
    pub branch: String,
    pub semester: u8,
    pub created_at: DateTime<Utc>,
    pub options: Vec<GeneratedTimetableOption>,
    pub selected_option: Option<String>,
    /// Creation order within this process; drives eviction.
    #[serde(skip)]
    pub sequence: u64,
}

impl GenerationSession {
    pub fn selected(&self) -> Option<&GeneratedTimetableOption> {
        let id = self.selected_option.as_deref()?;
        self.options.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportTicket {
    pub generation_id: Uuid,
    pub option_id: String,
    pub file_name: String,
    pub format: ExportFormat,
}

pub async fn create_session(
    store: &Store,
    branch: &str,
    semester: u8,
    options: Vec<GeneratedTimetableOption>,
) -> GenerationSession {
    let mut sessions = store.generations.write().await;
    let sequence = sessions
        .values()
        .map(|s| s.sequence)
        .max()
        .map_or(0, |last| last + 1);
    let session = GenerationSession {
        id: Uuid::new_v4(),
        branch: branch.trim().to_string(),
        semester,
        created_at: Utc::now(),
        options,
        selected_option: None,
        sequence,
    };

    while sessions.len() >= MAX_SESSIONS {
        let oldest = sessions.values().min_by_key(|s| s.sequence).map(|s| s.id);
        match oldest {
            Some(id) => {
                sessions.remove(&id);
            }
            None => break,
        }
    }
    sessions.insert(session.id, session.clone());
    session
}

pub async fn get_session(store: &Store, id: Uuid) -> Result<GenerationSession, AppError> {
    store
        .generations
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Generation {id} not found")))
}

pub async fn select_option(
    store: &Store,
    id: Uuid,
    option_id: &str,
) -> Result<GenerationSession, AppError> {
    let mut sessions = store.generations.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Generation {id} not found")))?;

    if !session.options.iter().any(|o| o.id == option_id) {
        return Err(AppError::NotFound(format!(
            "Option {option_id} not found in generation {id}"
        )));
    }
    session.selected_option = Some(option_id.to_string());
    info!("Generation {id}: selected {option_id}");
    Ok(session.clone())
}

/// Exports the selected option of a generation session.
pub async fn start_export(
    store: Arc<Store>,
    delay: Latency,
    id: Uuid,
    format: ExportFormat,
) -> Result<ExportTicket, AppError> {
    let session = get_session(&store, id).await?;
    let option = session.selected().ok_or_else(|| {
        AppError::Conflict(format!("Select an option of generation {id} before exporting"))
    })?;

    let ticket = ExportTicket {
        generation_id: id,
        option_id: option.id.clone(),
        file_name: export_file_name(&option.name, format),
        format,
    };

    run_export(
        store,
        delay,
        &ticket.file_name,
        format!("Downloading {}...", ticket.file_name),
        format!("{} has been downloaded successfully.", ticket.file_name),
    )
    .await;

    Ok(ticket)
}
