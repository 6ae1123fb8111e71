//! Seed data the service boots with. Every collection here is either served
//! read-only or copied into the in-memory store on startup.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::academic::{Exam, FacultyMember, Subject, Teacher};
use crate::models::dashboard::{DailyActivity, DashboardStats};
use crate::models::request::{FacultyRequest, RequestStatus, RequestType};
use crate::models::timetable::{TimeSlot, Timetable};
use crate::models::user::{AdminProfile, Role, StudentProfile, TeacherProfile, User, UserBase};

pub const DEFAULT_AVATAR: &str =
    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400";

const TEACHER_AVATAR: &str =
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=400";

const ADMIN_AVATAR: &str =
    "https://images.pexels.com/photos/1181519/pexels-photo-1181519.jpeg?auto=compress&cs=tinysrgb&w=400";

pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Electronics & Communication",
    "Mechanical Engineering",
    "Civil Engineering",
    "Electrical Engineering",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The demo account returned for a successful login with the given role.
pub fn demo_user(role: Role) -> User {
    match role {
        Role::Student => User::Student(StudentProfile {
            base: UserBase {
                id: "1".into(),
                name: "Rahul Sharma".into(),
                email: "rahul.sharma@student.edu".into(),
                avatar: Some(DEFAULT_AVATAR.into()),
            },
            student_id: "STU2024001".into(),
            stream: "Computer Science".into(),
            year: 3,
            semester: 5,
            phone: "+91-9876543210".into(),
        }),
        Role::Teacher => User::Teacher(TeacherProfile {
            base: UserBase {
                id: "2".into(),
                name: "Prof. Neha Verma".into(),
                email: "neha.verma@college.edu".into(),
                avatar: Some(TEACHER_AVATAR.into()),
            },
            teacher_id: "TCH2024001".into(),
            subjects: strings(&["Data Structures", "Algorithms", "Database Systems"]),
            department: "Computer Science".into(),
        }),
        Role::Admin => User::Admin(AdminProfile {
            base: UserBase {
                id: "3".into(),
                name: "Arjun Mehta".into(),
                email: "arjun.mehta@college.edu".into(),
                avatar: Some(ADMIN_AVATAR.into()),
            },
            admin_id: "ADM2024001".into(),
            permissions: strings(&["manage_timetables", "manage_faculty", "manage_students"]),
        }),
    }
}

/// Accounts present at startup: the demo user of every role.
pub fn users() -> Vec<User> {
    [Role::Student, Role::Teacher, Role::Admin]
        .into_iter()
        .map(demo_user)
        .collect()
}

pub fn subjects() -> Vec<Subject> {
    let rows = [
        ("1", "Data Structures", "CS301", 4, "Prof. Neha Verma"),
        ("2", "Database Systems", "CS302", 4, "Prof. Rajesh Kumar"),
        ("3", "Operating Systems", "CS303", 4, "Prof. Anjali Singh"),
        ("4", "Software Engineering", "CS304", 3, "Prof. Vikram Desai"),
        ("5", "Computer Networks", "CS305", 3, "Prof. Priya Nair"),
    ];
    rows.into_iter()
        .map(|(id, name, code, hours, teacher)| Subject {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            credits: 3,
            hours_per_week: hours,
            teacher: teacher.into(),
            department: "Computer Science".into(),
        })
        .collect()
}

pub fn teachers() -> Vec<Teacher> {
    let rows = [
        ("1", "Prof. Neha Verma", ["Data Structures", "Algorithms"], "Available"),
        ("2", "Prof. Rajesh Kumar", ["Database Systems", "Web Development"], "Busy"),
        ("3", "Prof. Anjali Singh", ["Operating Systems", "System Programming"], "Available"),
        ("4", "Prof. Vikram Desai", ["Software Engineering", "Project Management"], "Available"),
        ("5", "Prof. Priya Nair", ["Computer Networks", "Cybersecurity"], "Office Hours"),
    ];
    rows.into_iter()
        .map(|(id, name, subjects, availability)| Teacher {
            id: id.into(),
            name: name.into(),
            department: "Computer Science".into(),
            subjects: strings(&subjects),
            availability: availability.into(),
        })
        .collect()
}

pub fn faculty() -> Vec<FacultyMember> {
    vec![
        FacultyMember {
            id: "1".into(),
            name: "Dr. Sarah Wilson".into(),
            email: "sarah.wilson@college.edu".into(),
            phone: "+1-555-0123".into(),
            department: "Computer Science".into(),
            designation: "Professor".into(),
            subjects: strings(&["Data Structures", "Algorithms", "Database Systems"]),
            experience: "12 years".into(),
            qualification: "Ph.D. Computer Science".into(),
            availability: "Available".into(),
            avatar: Some(TEACHER_AVATAR.into()),
        },
        FacultyMember {
            id: "2".into(),
            name: "Dr. John Smith".into(),
            email: "john.smith@college.edu".into(),
            phone: "+1-555-0124".into(),
            department: "Computer Science".into(),
            designation: "Associate Professor".into(),
            subjects: strings(&["Web Development", "Software Engineering"]),
            experience: "8 years".into(),
            qualification: "Ph.D. Software Engineering".into(),
            availability: "Busy".into(),
            avatar: Some(ADMIN_AVATAR.into()),
        },
        FacultyMember {
            id: "3".into(),
            name: "Dr. Emily Brown".into(),
            email: "emily.brown@college.edu".into(),
            phone: "+1-555-0125".into(),
            department: "Information Technology".into(),
            designation: "Assistant Professor".into(),
            subjects: strings(&["Operating Systems", "Computer Networks"]),
            experience: "5 years".into(),
            qualification: "Ph.D. Information Technology".into(),
            availability: "Available".into(),
            avatar: Some(DEFAULT_AVATAR.into()),
        },
    ]
}

pub fn exams() -> Vec<Exam> {
    let rows = [
        ("1", "Data Structures", date(2024, 3, 15), "09:00 AM", "Main Hall"),
        ("2", "Database Systems", date(2024, 3, 18), "02:00 PM", "CS Building"),
        ("3", "Operating Systems", date(2024, 3, 20), "09:00 AM", "Main Hall"),
        ("4", "Software Engineering", date(2024, 3, 22), "02:00 PM", "Lab 1"),
        ("5", "Computer Networks", date(2024, 3, 25), "09:00 AM", "CS Building"),
    ];
    rows.into_iter()
        .map(|(id, subject, on, time, room)| Exam {
            id: id.into(),
            subject: subject.into(),
            date: on.to_string(),
            time: time.into(),
            duration: "3 hours".into(),
            room: room.into(),
        })
        .collect()
}

pub fn timetables() -> Vec<Timetable> {
    let subjects = subjects();
    // (day, [subject index per teaching period]); period 4 is lunch.
    let days: [(&str, [usize; 5]); 2] = [("Monday", [0, 1, 2, 3, 4]), ("Tuesday", [1, 0, 3, 2, 4])];

    let mut time_slots = Vec::new();
    let mut next_id = 1;
    for (day, order) in days {
        let mut teaching = order.iter();
        for period in 1..=6u8 {
            let start = 8 + period as u32;
            let mut slot = TimeSlot {
                id: next_id.to_string(),
                day: day.into(),
                period,
                start_time: format!("{start:02}:00"),
                end_time: format!("{:02}:00", start + 1),
                subject: None,
                teacher: None,
                room: None,
                is_break: false,
                is_lunch: period == 4,
            };
            if !slot.is_lunch {
                if let Some(&idx) = teaching.next() {
                    let subject = subjects[idx].clone();
                    slot.teacher = Some(subject.teacher.clone());
                    slot.room = Some(format!("CS-10{}", idx + 1));
                    slot.subject = Some(subject);
                }
            }
            time_slots.push(slot);
            next_id += 1;
        }
    }

    vec![Timetable {
        id: "1".into(),
        branch: "Computer Science".into(),
        semester: 5,
        stream: "Regular".into(),
        periods_per_day: 6,
        lunch_period: 4,
        time_slots,
        created_at: date(2024, 1, 15),
        last_modified: date(2024, 1, 20),
    }]
}

pub fn faculty_requests() -> Vec<FacultyRequest> {
    vec![
        FacultyRequest {
            id: "1".into(),
            teacher_id: "TCH2024001".into(),
            teacher_name: "Prof. Neha Verma".into(),
            request_type: RequestType::Leave,
            date: date(2024, 2, 15),
            reason: "Medical appointment".into(),
            status: RequestStatus::Pending,
            submitted_at: midnight(2024, 2, 10),
            affected_classes: Some(strings(&[
                "CS301 - Data Structures",
                "CS302 - Database Systems",
            ])),
            decision_note: None,
        },
        FacultyRequest {
            id: "2".into(),
            teacher_id: "TCH2024002".into(),
            teacher_name: "Prof. Rajesh Kumar".into(),
            request_type: RequestType::SpecialClass,
            date: date(2024, 2, 18),
            reason: "Make-up class for missed lecture".into(),
            status: RequestStatus::Approved,
            submitted_at: midnight(2024, 2, 12),
            affected_classes: None,
            decision_note: None,
        },
        FacultyRequest {
            id: "3".into(),
            teacher_id: "TCH2024003".into(),
            teacher_name: "Prof. Anjali Singh".into(),
            request_type: RequestType::Leave,
            date: date(2024, 2, 20),
            reason: "Conference attendance".into(),
            status: RequestStatus::Pending,
            submitted_at: midnight(2024, 2, 14),
            affected_classes: Some(strings(&["CS303 - Operating Systems"])),
            decision_note: None,
        },
    ]
}

fn week(requests: [u32; 7], classes: [u32; 7]) -> Vec<DailyActivity> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .into_iter()
        .zip(requests.into_iter().zip(classes))
        .map(|(day, (requests, classes))| DailyActivity {
            day: day.into(),
            requests,
            classes,
        })
        .collect()
}

pub fn dashboard_stats(role: Role) -> DashboardStats {
    match role {
        Role::Admin => DashboardStats {
            total_students: 1250,
            total_teachers: 85,
            total_subjects: 120,
            pending_requests: 12,
            weekly_activity: week([5, 8, 3, 12, 7, 2, 1], [45, 42, 48, 40, 38, 25, 15]),
        },
        Role::Teacher => DashboardStats {
            total_students: 180,
            total_teachers: 1,
            total_subjects: 3,
            pending_requests: 1,
            weekly_activity: week([0, 1, 0, 0, 0, 0, 0], [6, 5, 7, 6, 4, 2, 0]),
        },
        Role::Student => DashboardStats {
            total_students: 1,
            total_teachers: 15,
            total_subjects: 8,
            pending_requests: 0,
            weekly_activity: week([0; 7], [6, 5, 7, 6, 4, 2, 0]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user_matches_role() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            assert_eq!(demo_user(role).role(), role);
        }
    }

    #[test]
    fn test_seed_timetable_has_lunch_in_period_four() {
        let tt = &timetables()[0];
        assert_eq!(tt.time_slots.len(), 12);
        for slot in &tt.time_slots {
            assert_eq!(slot.is_lunch, slot.period == 4);
            assert_eq!(slot.subject.is_none(), slot.is_lunch);
        }
        assert_eq!(tt.time_slots[0].start_time, "09:00");
        assert_eq!(tt.time_slots[5].end_time, "15:00");
    }

    #[test]
    fn test_weekly_activity_has_seven_days() {
        assert_eq!(dashboard_stats(Role::Admin).weekly_activity.len(), 7);
        assert_eq!(dashboard_stats(Role::Admin).weekly_activity[3].requests, 12);
    }
}
