// Timetable module.
// Stored timetables start from fixtures and can be searched, exported and
// deleted. Generation is a deterministic round-robin placement wrapped in
// three presentation variants; clash checking is a pluggable stub.

pub mod clash;
pub mod export;
pub mod generator;
pub mod handlers;
pub mod session;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::latency::Latency;
use crate::models::notification::NotificationKind;
use crate::models::timetable::Timetable;
use crate::store::Store;
use crate::timetable::export::{export_file_name, run_export, ExportFormat};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimetableQuery {
    /// Case-insensitive substring of branch or stream.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub semester: Option<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimetableExportTicket {
    pub timetable_id: String,
    pub file_name: String,
    pub format: ExportFormat,
}

pub fn filter_timetables(timetables: &[Timetable], query: &TimetableQuery) -> Vec<Timetable> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    timetables
        .iter()
        .filter(|t| {
            needle.as_deref().map_or(true, |n| {
                t.branch.to_lowercase().contains(n) || t.stream.to_lowercase().contains(n)
            })
        })
        .filter(|t| query.branch.as_deref().map_or(true, |b| t.branch == b))
        .filter(|t| query.semester.map_or(true, |s| t.semester == s))
        .cloned()
        .collect()
}

pub async fn get_timetable(store: &Store, id: &str) -> Result<Timetable, AppError> {
    store
        .timetables
        .read()
        .await
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Timetable {id} not found")))
}

pub async fn delete_timetable(store: &Store, id: &str) -> Result<(), AppError> {
    {
        let mut timetables = store.timetables.write().await;
        let before = timetables.len();
        timetables.retain(|t| t.id != id);
        if timetables.len() == before {
            return Err(AppError::NotFound(format!("Timetable {id} not found")));
        }
    }
    info!("Deleted timetable {id}");
    store
        .notifications
        .push(
            "Deleted",
            "Timetable has been deleted successfully",
            NotificationKind::Success,
        )
        .await;
    Ok(())
}

pub async fn export_timetable(
    store: Arc<Store>,
    delay: Latency,
    id: &str,
    format: ExportFormat,
) -> Result<TimetableExportTicket, AppError> {
    let timetable = get_timetable(&store, id).await?;
    let ticket = TimetableExportTicket {
        timetable_id: timetable.id.clone(),
        file_name: export_file_name(
            &format!("{} sem {}", timetable.branch, timetable.semester),
            format,
        ),
        format,
    };

    run_export(
        store,
        delay,
        &ticket.file_name,
        format!(
            "Exporting {} Semester {} timetable as {}...",
            timetable.branch,
            timetable.semester,
            format.extension().to_uppercase()
        ),
        "Timetable exported successfully".to_string(),
    )
    .await;
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::latency;
    use std::time::Duration;

    fn query(search: Option<&str>, branch: Option<&str>, semester: Option<u8>) -> TimetableQuery {
        TimetableQuery {
            search: search.map(str::to_string),
            branch: branch.map(str::to_string),
            semester,
        }
    }

    #[test]
    fn test_filter_by_branch_and_semester() {
        let all = fixtures::timetables();
        assert_eq!(filter_timetables(&all, &query(None, None, None)).len(), 1);
        assert_eq!(
            filter_timetables(&all, &query(None, Some("Computer Science"), Some(5))).len(),
            1
        );
        assert!(filter_timetables(&all, &query(None, Some("Civil Engineering"), None)).is_empty());
        assert!(filter_timetables(&all, &query(None, None, Some(3))).is_empty());
    }

    #[test]
    fn test_search_matches_branch_or_stream() {
        let all = fixtures::timetables();
        let stream = all[0].stream.to_uppercase();
        assert_eq!(filter_timetables(&all, &query(Some("comp"), None, None)).len(), 1);
        assert_eq!(filter_timetables(&all, &query(Some(stream.as_str()), None, None)).len(), 1);
        assert_eq!(filter_timetables(&all, &query(Some("  "), None, None)).len(), 1);
        assert!(filter_timetables(&all, &query(Some("mechanical"), None, None)).is_empty());
        assert!(filter_timetables(&all, &query(Some("comp"), None, Some(2))).is_empty());
    }

    #[tokio::test]
    async fn test_delete_timetable() {
        let store = Store::seeded();
        delete_timetable(&store, "1").await.unwrap();
        assert!(store.timetables.read().await.is_empty());
        assert_eq!(store.notifications.list().await[0].title, "Deleted");

        assert!(matches!(
            delete_timetable(&store, "1").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            get_timetable(&store, "1").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_stored_timetable() {
        let store = Arc::new(Store::seeded());
        let ticket = export_timetable(store.clone(), Latency::new(1.0), "1", ExportFormat::Excel)
            .await
            .unwrap();
        assert_eq!(ticket.file_name, "timetable_computer_science_sem_5.excel");

        let feed = store.notifications.list().await;
        assert_eq!(feed[0].title, "Export Started");
        assert_eq!(
            feed[0].message,
            "Exporting Computer Science Semester 5 timetable as EXCEL..."
        );

        tokio::time::sleep(Duration::from_millis(latency::EXPORT_MS + 10)).await;
        let feed = store.notifications.list().await;
        assert_eq!(feed[0].title, "Export Complete");
        assert_eq!(feed[0].message, "Timetable exported successfully");

        let err = export_timetable(store, Latency::new(0.0), "404", ExportFormat::Pdf)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
