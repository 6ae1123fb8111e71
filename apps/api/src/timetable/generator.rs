//! Timetable generation.
//!
//! Placement is a plain round-robin: every teaching slot at position `i`
//! of a day gets `subjects[i % subjects.len()]`. The three options returned
//! to the caller share the same schedule and differ only in their labels and
//! fixed scores. There is no conflict resolution and no hours budget.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::validation::FieldErrors;

pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Start hour of each daily slot; every slot is one hour long.
pub const SLOT_START_HOURS: [u32; 8] = [9, 10, 11, 12, 13, 14, 15, 16];

pub const LUNCH_LABEL: &str = "Lunch Break";
pub const LUNCH_ROOM: &str = "Cafeteria";
const UNASSIGNED_TEACHER: &str = "TBD";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    #[default]
    Theory,
    Lab,
    Tutorial,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Theory,
    Lab,
    Tutorial,
    Lunch,
}

impl From<SessionKind> for SlotKind {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Theory => SlotKind::Theory,
            SessionKind::Lab => SlotKind::Lab,
            SessionKind::Tutorial => SlotKind::Tutorial,
        }
    }
}

/// One row of the generation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectInput {
    pub name: String,
    pub teacher: String,
    pub hours_per_week: u8,
    #[serde(rename = "type", default)]
    pub kind: SessionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedSlot {
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    pub day: String,
    pub slots: Vec<GeneratedSlot>,
}

/// Days in weekday order.
pub type Schedule = Vec<DaySchedule>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTimetableOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub efficiency: u8,
    pub conflicts: u8,
    pub schedule: Schedule,
}

struct OptionProfile {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    efficiency: u8,
    conflicts: u8,
}

const OPTION_PROFILES: [OptionProfile; 3] = [
    OptionProfile {
        id: "option-1",
        name: "Balanced Distribution",
        description: "Evenly distributed subjects across all days with optimal break timing and minimal teacher conflicts.",
        efficiency: 95,
        conflicts: 0,
    },
    OptionProfile {
        id: "option-2",
        name: "Morning Intensive",
        description: "Concentrated morning sessions with lighter afternoons, ideal for better student attention.",
        efficiency: 88,
        conflicts: 1,
    },
    OptionProfile {
        id: "option-3",
        name: "Lab-Theory Optimized",
        description: "Strategic placement of lab and theory sessions for maximum learning efficiency.",
        efficiency: 92,
        conflicts: 0,
    },
];

/// The generation form as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub branch: String,
    pub semester: u8,
    #[serde(default = "default_duration")]
    pub class_duration: u16,
    #[serde(default = "default_duration")]
    pub lunch_duration: u16,
    #[serde(default = "default_lunch_start")]
    pub lunch_start_time: String,
    pub subjects: Vec<SubjectInput>,
}

fn default_duration() -> u16 {
    60
}

fn default_lunch_start() -> String {
    "12:00".to_string()
}

impl GenerateRequest {
    /// Checks every form rule and returns the parsed lunch start.
    pub fn validate(&self) -> Result<NaiveTime, AppError> {
        let mut errs = FieldErrors::new();
        errs.required("branch", &self.branch, "Branch is required");
        errs.range("semester", self.semester, 1, 8);
        errs.range("class_duration", self.class_duration, 30, 180);
        errs.range("lunch_duration", self.lunch_duration, 30, 120);
        let lunch = errs.clock_time(
            "lunch_start_time",
            &self.lunch_start_time,
            "Lunch start time must be HH:MM",
        );

        if self.subjects.is_empty() {
            errs.push("subjects", "At least one subject is required");
        }
        for (i, subject) in self.subjects.iter().enumerate() {
            errs.required(
                &format!("subjects[{i}].name"),
                &subject.name,
                "Subject name is required",
            );
            errs.required(
                &format!("subjects[{i}].teacher"),
                &subject.teacher,
                "Teacher is required",
            );
            errs.range(
                &format!("subjects[{i}].hours_per_week"),
                subject.hours_per_week,
                1,
                10,
            );
        }

        AppError::check_fields(errs.into_inner())?;
        Ok(lunch.unwrap_or_default())
    }
}

fn slot_time(hour: u32) -> String {
    format!("{hour:02}:00 - {:02}:00", hour + 1)
}

fn lunch_slot(hour: u32) -> GeneratedSlot {
    GeneratedSlot {
        time: slot_time(hour),
        subject: LUNCH_LABEL.to_string(),
        teacher: String::new(),
        room: LUNCH_ROOM.to_string(),
        kind: SlotKind::Lunch,
    }
}

fn teaching_slot(hour: u32, index: usize, subject: &SubjectInput) -> GeneratedSlot {
    let position = index + 1;
    let name = subject.name.trim();
    let teacher = subject.teacher.trim();
    GeneratedSlot {
        time: slot_time(hour),
        subject: if name.is_empty() {
            format!("Subject {position}")
        } else {
            name.to_string()
        },
        teacher: if teacher.is_empty() {
            UNASSIGNED_TEACHER.to_string()
        } else {
            teacher.to_string()
        },
        room: match subject.kind {
            SessionKind::Lab => format!("Lab-{position}"),
            _ => format!("Room-{position}"),
        },
        kind: subject.kind.into(),
    }
}

/// Builds the weekly grid.
///
/// The slot starting at `lunch_start` becomes the lunch break. Every other
/// slot takes `subjects[index % subjects.len()]`, where `index` counts all
/// slots of the day including lunch. With no subjects only the lunch slot
/// (if any) is emitted.
pub fn assign_slots(subjects: &[SubjectInput], lunch_start: NaiveTime) -> Schedule {
    WEEKDAYS
        .iter()
        .map(|day| {
            let slots = SLOT_START_HOURS
                .iter()
                .enumerate()
                .filter_map(|(index, &hour)| {
                    if NaiveTime::from_hms_opt(hour, 0, 0) == Some(lunch_start) {
                        Some(lunch_slot(hour))
                    } else if subjects.is_empty() {
                        None
                    } else {
                        Some(teaching_slot(hour, index, &subjects[index % subjects.len()]))
                    }
                })
                .collect();
            DaySchedule {
                day: day.to_string(),
                slots,
            }
        })
        .collect()
}

/// Packages the schedule into the three presentation variants.
pub fn generate_options(
    subjects: &[SubjectInput],
    lunch_start: NaiveTime,
) -> Vec<GeneratedTimetableOption> {
    let schedule = assign_slots(subjects, lunch_start);
    OPTION_PROFILES
        .iter()
        .map(|profile| GeneratedTimetableOption {
            id: profile.id.to_string(),
            name: profile.name.to_string(),
            description: profile.description.to_string(),
            efficiency: profile.efficiency,
            conflicts: profile.conflicts,
            schedule: schedule.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn subject(name: &str, teacher: &str, kind: SessionKind) -> SubjectInput {
        SubjectInput {
            name: name.into(),
            teacher: teacher.into(),
            hours_per_week: 3,
            kind,
        }
    }

    fn three_subjects() -> Vec<SubjectInput> {
        vec![
            subject("Data Structures", "Dr. Sarah Wilson", SessionKind::Theory),
            subject("Networks Lab", "Dr. Emily Brown", SessionKind::Lab),
            subject("Maths Tutorial", "Dr. David Lee", SessionKind::Tutorial),
        ]
    }

    fn request(subjects: Vec<SubjectInput>) -> GenerateRequest {
        GenerateRequest {
            branch: "Computer Science".into(),
            semester: 5,
            class_duration: 60,
            lunch_duration: 60,
            lunch_start_time: "12:00".into(),
            subjects,
        }
    }

    #[test]
    fn test_grid_is_five_days_by_eight_slots() {
        for n in 1..=9 {
            let subjects: Vec<_> = (0..n)
                .map(|i| subject(&format!("S{i}"), "T", SessionKind::Theory))
                .collect();
            let schedule = assign_slots(&subjects, at(12, 0));
            assert_eq!(schedule.len(), 5);
            for day in &schedule {
                assert_eq!(day.slots.len(), 8, "n = {n}");
            }
        }
    }

    #[test]
    fn test_days_in_weekday_order() {
        let schedule = assign_slots(&three_subjects(), at(12, 0));
        let days: Vec<_> = schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, WEEKDAYS);
    }

    #[test]
    fn test_lunch_slot_at_configured_time() {
        for hour in SLOT_START_HOURS {
            let schedule = assign_slots(&three_subjects(), at(hour, 0));
            for day in &schedule {
                let lunch: Vec<_> = day
                    .slots
                    .iter()
                    .filter(|s| s.kind == SlotKind::Lunch)
                    .collect();
                assert_eq!(lunch.len(), 1);
                assert_eq!(lunch[0].subject, LUNCH_LABEL);
                assert_eq!(lunch[0].room, LUNCH_ROOM);
                assert_eq!(lunch[0].teacher, "");
                assert!(lunch[0].time.starts_with(&format!("{hour:02}:00")));
            }
        }
    }

    #[test]
    fn test_round_robin_counts_lunch_position() {
        let subjects = three_subjects();
        let schedule = assign_slots(&subjects, at(12, 0));
        for day in &schedule {
            for (i, slot) in day.slots.iter().enumerate() {
                if i == 3 {
                    assert_eq!(slot.kind, SlotKind::Lunch);
                    continue;
                }
                let expected = &subjects[i % subjects.len()];
                assert_eq!(slot.subject, expected.name);
                assert_eq!(slot.teacher, expected.teacher);
                assert_eq!(slot.kind, SlotKind::from(expected.kind));
            }
        }
    }

    #[test]
    fn test_rooms_and_time_labels() {
        let schedule = assign_slots(&three_subjects(), at(12, 0));
        let monday = &schedule[0].slots;
        assert_eq!(monday[0].time, "09:00 - 10:00");
        assert_eq!(monday[0].room, "Room-1");
        assert_eq!(monday[1].room, "Lab-2");
        assert_eq!(monday[2].room, "Room-3");
        assert_eq!(monday[7].time, "16:00 - 17:00");
        // index 7 -> subjects[1], the lab
        assert_eq!(monday[7].room, "Lab-8");
    }

    #[test]
    fn test_blank_name_and_teacher_get_placeholders() {
        let schedule = assign_slots(&[subject("", " ", SessionKind::Theory)], at(12, 0));
        let slot = &schedule[0].slots[4];
        assert_eq!(slot.subject, "Subject 5");
        assert_eq!(slot.teacher, "TBD");
    }

    #[test]
    fn test_empty_subjects_only_emit_lunch() {
        let schedule = assign_slots(&[], at(13, 0));
        for day in &schedule {
            assert_eq!(day.slots.len(), 1);
            assert_eq!(day.slots[0].kind, SlotKind::Lunch);
        }
    }

    #[test]
    fn test_lunch_outside_grid_yields_no_break() {
        let schedule = assign_slots(&three_subjects(), at(8, 0));
        assert!(schedule[0].slots.iter().all(|s| s.kind != SlotKind::Lunch));
        assert_eq!(schedule[0].slots.len(), 8);

        let off_hour = assign_slots(&three_subjects(), at(12, 30));
        assert!(off_hour[0].slots.iter().all(|s| s.kind != SlotKind::Lunch));
    }

    #[test]
    fn test_three_options_share_one_schedule() {
        let options = generate_options(&three_subjects(), at(12, 0));
        assert_eq!(options.len(), 3);
        let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["option-1", "option-2", "option-3"]);
        let scores: Vec<_> = options.iter().map(|o| (o.efficiency, o.conflicts)).collect();
        assert_eq!(scores, [(95, 0), (88, 1), (92, 0)]);
        assert_eq!(options[0].schedule, options[1].schedule);
        assert_eq!(options[1].schedule, options[2].schedule);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_options(&three_subjects(), at(11, 0));
        let b = generate_options(&three_subjects(), at(11, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_accepts_default_form() {
        let lunch = request(three_subjects()).validate().unwrap();
        assert_eq!(lunch, at(12, 0));
    }

    #[test]
    fn test_validate_reports_each_bad_field() {
        let mut req = request(vec![SubjectInput {
            name: "".into(),
            teacher: "".into(),
            hours_per_week: 0,
            kind: SessionKind::Theory,
        }]);
        req.branch = " ".into();
        req.class_duration = 20;
        req.lunch_duration = 200;
        req.lunch_start_time = "lunch".into();
        let AppError::InvalidFields(fields) = req.validate().unwrap_err() else {
            panic!("expected field errors");
        };
        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            names,
            [
                "branch",
                "class_duration",
                "lunch_duration",
                "lunch_start_time",
                "subjects[0].name",
                "subjects[0].teacher",
                "subjects[0].hours_per_week",
            ]
        );
    }

    #[test]
    fn test_validate_requires_a_subject() {
        let err = request(vec![]).validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidFields(ref f) if f[0].field == "subjects"));
    }

    #[test]
    fn test_subject_type_defaults_to_theory() {
        let s: SubjectInput =
            serde_json::from_str(r#"{"name":"OS","teacher":"T","hours_per_week":3}"#).unwrap();
        assert_eq!(s.kind, SessionKind::Theory);
        let lab: SubjectInput =
            serde_json::from_str(r#"{"name":"OS","teacher":"T","hours_per_week":3,"type":"lab"}"#)
                .unwrap();
        assert_eq!(lab.kind, SessionKind::Lab);
    }
}
