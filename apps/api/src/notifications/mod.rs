//! Notification feed: the server-side counterpart of the dashboard toasts.
//! Newest first, bounded to the most recent entries.

pub mod handlers;

use std::collections::VecDeque;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::notification::{Notification, NotificationKind};

pub const FEED_CAPACITY: usize = 10;

pub struct NotificationFeed {
    entries: RwLock<VecDeque<Notification>>,
}

impl NotificationFeed {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(FEED_CAPACITY)),
        }
    }

    /// Feed with the two welcome entries every new session starts with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let entries = VecDeque::from(vec![
            Notification {
                id: "1".into(),
                title: "Welcome!".into(),
                message: "Your timetable has been successfully generated.".into(),
                kind: NotificationKind::Success,
                timestamp: now,
            },
            Notification {
                id: "2".into(),
                title: "Reminder".into(),
                message: "Faculty meeting scheduled for tomorrow at 2 PM.".into(),
                kind: NotificationKind::Info,
                timestamp: now - Duration::hours(1),
            },
        ]);
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn push(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().simple().to_string(),
            title: title.into(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
        };
        debug!("notification: {} - {}", notification.title, notification.message);

        let mut entries = self.entries.write().await;
        entries.push_front(notification.clone());
        entries.truncate(FEED_CAPACITY);
        notification
    }

    pub async fn list(&self) -> Vec<Notification> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|n| n.id != id);
        if entries.len() == before {
            return Err(AppError::NotFound(format!("Notification {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_feed_has_two_entries() {
        let feed = NotificationFeed::seeded();
        let list = feed.list().await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Welcome!");
    }

    #[tokio::test]
    async fn test_push_goes_to_front() {
        let feed = NotificationFeed::seeded();
        feed.push("Saved", "Done", NotificationKind::Success).await;
        assert_eq!(feed.list().await[0].title, "Saved");
    }

    #[tokio::test]
    async fn test_feed_is_capped() {
        let feed = NotificationFeed::empty();
        for i in 0..15 {
            feed.push(format!("n{i}"), "m", NotificationKind::Info).await;
        }
        let list = feed.list().await;
        assert_eq!(list.len(), FEED_CAPACITY);
        assert_eq!(list[0].title, "n14");
        assert_eq!(list[FEED_CAPACITY - 1].title, "n5");
    }

    #[tokio::test]
    async fn test_remove_unknown_is_not_found() {
        let feed = NotificationFeed::seeded();
        assert!(matches!(
            feed.remove("nope").await,
            Err(AppError::NotFound(_))
        ));
        feed.remove("1").await.unwrap();
        assert_eq!(feed.list().await.len(), 1);
    }
}
