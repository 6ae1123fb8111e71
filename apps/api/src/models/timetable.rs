use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::academic::Subject;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    pub day: String,
    pub period: u8,
    pub start_time: String,
    pub end_time: String,
    pub subject: Option<Subject>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub is_lunch: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timetable {
    pub id: String,
    pub branch: String,
    pub semester: u8,
    pub stream: String,
    pub periods_per_day: u8,
    pub lunch_period: u8,
    pub time_slots: Vec<TimeSlot>,
    pub created_at: NaiveDate,
    pub last_modified: NaiveDate,
}
