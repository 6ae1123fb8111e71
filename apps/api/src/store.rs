use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::fixtures;
use crate::models::academic::{Exam, FacultyMember, Subject, Teacher};
use crate::models::request::FacultyRequest;
use crate::models::timetable::Timetable;
use crate::models::user::User;
use crate::notifications::NotificationFeed;
use crate::timetable::session::GenerationSession;

/// In-process data store standing in for a backend. Mutable collections are
/// each behind their own lock; fixture-only collections are plain fields.
pub struct Store {
    pub users: RwLock<Vec<User>>,
    pub subjects: RwLock<Vec<Subject>>,
    pub faculty: RwLock<Vec<FacultyMember>>,
    pub requests: RwLock<Vec<FacultyRequest>>,
    pub generations: RwLock<HashMap<Uuid, GenerationSession>>,
    pub notifications: NotificationFeed,
    pub teachers: Vec<Teacher>,
    pub timetables: RwLock<Vec<Timetable>>,
    pub exams: Vec<Exam>,
}

impl Store {
    /// Creates a store populated with the demo fixtures.
    pub fn seeded() -> Self {
        let store = Self {
            users: RwLock::new(fixtures::users()),
            subjects: RwLock::new(fixtures::subjects()),
            faculty: RwLock::new(fixtures::faculty()),
            requests: RwLock::new(fixtures::faculty_requests()),
            generations: RwLock::new(HashMap::new()),
            notifications: NotificationFeed::seeded(),
            teachers: fixtures::teachers(),
            timetables: RwLock::new(fixtures::timetables()),
            exams: fixtures::exams(),
        };
        info!(
            "Store seeded: {} users, {} subjects, {} faculty, {} requests, {} timetables",
            store.users.try_read().map(|u| u.len()).unwrap_or_default(),
            store.subjects.try_read().map(|s| s.len()).unwrap_or_default(),
            store.faculty.try_read().map(|f| f.len()).unwrap_or_default(),
            store.requests.try_read().map(|r| r.len()).unwrap_or_default(),
            store.timetables.try_read().map(|t| t.len()).unwrap_or_default()
        );
        store
    }
}

/// Fresh short identifier for records created at runtime.
pub fn new_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..9].to_string()
}
