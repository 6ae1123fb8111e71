use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub credits: u8,
    pub hours_per_week: u8,
    pub teacher: String,
    pub department: String,
}

/// Teacher directory entry shown on the student dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub department: String,
    pub subjects: Vec<String>,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacultyMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub experience: String,
    pub qualification: String,
    pub availability: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: String,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub room: String,
}
