use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{department_matches, search_term};
use crate::errors::AppError;
use crate::fixtures::DEFAULT_AVATAR;
use crate::models::academic::FacultyMember;
use crate::store::{new_id, Store};
use crate::validation::FieldErrors;

pub const DESIGNATIONS: &[&str] = &["Professor", "Associate Professor", "Assistant Professor"];

const AVAILABLE: &str = "Available";
const BUSY: &str = "Busy";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacultyQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignationCount {
    pub designation: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacultyStats {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub by_designation: Vec<DesignationCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFacultyMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub designation: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub qualification: String,
}

/// Search covers name, email and taught subjects.
pub fn filter_faculty(faculty: &[FacultyMember], query: &FacultyQuery) -> Vec<FacultyMember> {
    let term = search_term(query.search.as_deref());
    faculty
        .iter()
        .filter(|m| {
            term.as_deref().map_or(true, |t| {
                m.name.to_lowercase().contains(t)
                    || m.email.to_lowercase().contains(t)
                    || m.subjects.iter().any(|s| s.to_lowercase().contains(t))
            })
        })
        .filter(|m| department_matches(query.department.as_deref(), &m.department))
        .cloned()
        .collect()
}

pub fn compute_faculty_stats(faculty: &[FacultyMember]) -> FacultyStats {
    FacultyStats {
        total: faculty.len(),
        available: faculty.iter().filter(|m| m.availability == AVAILABLE).count(),
        busy: faculty.iter().filter(|m| m.availability == BUSY).count(),
        by_designation: DESIGNATIONS
            .iter()
            .map(|d| DesignationCount {
                designation: d.to_string(),
                count: faculty.iter().filter(|m| m.designation == *d).count(),
            })
            .collect(),
    }
}

pub async fn add_faculty_member(
    store: &Store,
    new: NewFacultyMember,
) -> Result<FacultyMember, AppError> {
    let mut errs = FieldErrors::new();
    errs.min_len("name", &new.name, 2, "Name must be at least 2 characters");
    errs.email("email", &new.email);
    errs.min_len("phone", &new.phone, 10, "Please enter a valid phone number");
    errs.required("department", &new.department, "Department is required");
    if !DESIGNATIONS.contains(&new.designation.trim()) {
        errs.push(
            "designation",
            format!("Designation must be one of: {}", DESIGNATIONS.join(", ")),
        );
    }
    AppError::check_fields(errs.into_inner())?;

    let member = FacultyMember {
        id: new_id(),
        name: new.name.trim().to_string(),
        email: new.email.trim().to_string(),
        phone: new.phone.trim().to_string(),
        department: new.department.trim().to_string(),
        designation: new.designation.trim().to_string(),
        subjects: new.subjects,
        experience: new.experience,
        qualification: new.qualification,
        availability: AVAILABLE.to_string(),
        avatar: Some(DEFAULT_AVATAR.to_string()),
    };
    store.faculty.write().await.push(member.clone());
    info!("Added faculty member {} to {}", member.name, member.department);
    Ok(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_search_matches_subjects() {
        let roster = fixtures::faculty();
        let query = FacultyQuery {
            search: Some("networks".into()),
            department: None,
        };
        let found = filter_faculty(&roster, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dr. Emily Brown");
    }

    #[test]
    fn test_department_and_search_combine() {
        let roster = fixtures::faculty();
        let query = FacultyQuery {
            search: Some("dr.".into()),
            department: Some("Computer Science".into()),
        };
        assert_eq!(filter_faculty(&roster, &query).len(), 2);
    }

    #[test]
    fn test_stats_from_seed_roster() {
        let stats = compute_faculty_stats(&fixtures::faculty());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.busy, 1);
        assert!(stats.by_designation.iter().all(|d| d.count == 1));
    }

    #[tokio::test]
    async fn test_add_member_defaults_to_available() {
        let store = Store::seeded();
        let member = add_faculty_member(
            &store,
            NewFacultyMember {
                name: "Dr. Kavya Iyer".into(),
                email: "kavya.iyer@college.edu".into(),
                phone: "+1-555-0126".into(),
                department: "Electrical Engineering".into(),
                designation: "Assistant Professor".into(),
                subjects: vec!["Power Systems".into()],
                experience: "3 years".into(),
                qualification: "M.Tech".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(member.availability, "Available");
        assert_eq!(compute_faculty_stats(&store.faculty.read().await).total, 4);
    }

    #[tokio::test]
    async fn test_add_member_rejects_unknown_designation() {
        let store = Store::seeded();
        let err = add_faculty_member(
            &store,
            NewFacultyMember {
                name: "Dr. X".into(),
                email: "x@college.edu".into(),
                phone: "+1-555-0199".into(),
                department: "Civil Engineering".into(),
                designation: "Dean".into(),
                subjects: vec![],
                experience: String::new(),
                qualification: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidFields(ref f) if f[0].field == "designation"));
    }
}
