use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyActivity {
    pub day: String,
    pub requests: u32,
    pub classes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_students: u32,
    pub total_teachers: u32,
    pub total_subjects: u32,
    pub pending_requests: u32,
    pub weekly_activity: Vec<DailyActivity>,
}
