//! Simulated file export shared by generated options and stored timetables.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::latency::{self, Latency};
use crate::models::notification::NotificationKind;
use crate::store::Store;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
        }
    }
}

/// `timetable_<label, lowercased, whitespace runs as '_'>.<ext>`
pub fn export_file_name(label: &str, format: ExportFormat) -> String {
    let slug = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("timetable_{slug}.{}", format.extension())
}

/// Pushes "Export Started" now and "Export Complete" once the simulated
/// download delay has passed. No file is written.
pub async fn run_export(
    store: Arc<Store>,
    delay: Latency,
    file_name: &str,
    started: String,
    completed: String,
) {
    store
        .notifications
        .push("Export Started", started, NotificationKind::Info)
        .await;
    info!("Export of {file_name} started");

    tokio::spawn(async move {
        delay.simulate(latency::EXPORT_MS).await;
        store
            .notifications
            .push("Export Complete", completed, NotificationKind::Success)
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Balanced Distribution", ExportFormat::Pdf),
            "timetable_balanced_distribution.pdf"
        );
        assert_eq!(
            export_file_name("Lab-Theory  Optimized", ExportFormat::Excel),
            "timetable_lab-theory_optimized.excel"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_arrives_after_delay() {
        let store = Arc::new(Store::seeded());
        run_export(
            store.clone(),
            Latency::new(1.0),
            "timetable_x.csv",
            "started".into(),
            "done".into(),
        )
        .await;
        assert_eq!(store.notifications.list().await[0].message, "started");

        tokio::time::sleep(Duration::from_millis(latency::EXPORT_MS / 2)).await;
        assert_eq!(store.notifications.list().await[0].title, "Export Started");

        tokio::time::sleep(Duration::from_millis(latency::EXPORT_MS)).await;
        let feed = store.notifications.list().await;
        assert_eq!(feed[0].title, "Export Complete");
        assert_eq!(feed[0].message, "done");
    }
}
