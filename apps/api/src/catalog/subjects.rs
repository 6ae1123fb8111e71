use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{department_matches, search_term};
use crate::errors::AppError;
use crate::fixtures::DEPARTMENTS;
use crate::models::academic::Subject;
use crate::store::{new_id, Store};
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepartmentSubjects {
    pub department: String,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub code: String,
    pub credits: u8,
    pub hours_per_week: u8,
    pub teacher: String,
    pub department: String,
}

/// Search covers name, code and teacher.
pub fn filter_subjects(subjects: &[Subject], query: &SubjectQuery) -> Vec<Subject> {
    let term = search_term(query.search.as_deref());
    subjects
        .iter()
        .filter(|s| {
            term.as_deref().map_or(true, |t| {
                s.name.to_lowercase().contains(t)
                    || s.code.to_lowercase().contains(t)
                    || s.teacher.to_lowercase().contains(t)
            })
        })
        .filter(|s| department_matches(query.department.as_deref(), &s.department))
        .cloned()
        .collect()
}

/// One group per known department, in catalog order, followed by any
/// department that only appears on subjects.
pub fn group_by_department(subjects: &[Subject]) -> Vec<DepartmentSubjects> {
    let mut departments: Vec<String> = DEPARTMENTS.iter().map(|d| d.to_string()).collect();
    for subject in subjects {
        if !departments.contains(&subject.department) {
            departments.push(subject.department.clone());
        }
    }

    departments
        .into_iter()
        .map(|department| DepartmentSubjects {
            subjects: subjects
                .iter()
                .filter(|s| s.department == department)
                .cloned()
                .collect(),
            department,
        })
        .collect()
}

pub async fn add_subject(store: &Store, new: NewSubject) -> Result<Subject, AppError> {
    let mut errs = FieldErrors::new();
    errs.required("name", &new.name, "Subject name is required");
    errs.required("code", &new.code, "Subject code is required");
    if new.credits < 1 {
        errs.push("credits", "Credits must be at least 1");
    }
    errs.range("hours_per_week", new.hours_per_week, 1, 10);
    errs.required("teacher", &new.teacher, "Teacher is required");
    errs.required("department", &new.department, "Department is required");

    let mut subjects = store.subjects.write().await;
    let code = new.code.trim().to_uppercase();
    if !code.is_empty() && subjects.iter().any(|s| s.code.eq_ignore_ascii_case(&code)) {
        errs.push("code", format!("Subject code {code} already exists"));
    }
    AppError::check_fields(errs.into_inner())?;

    let subject = Subject {
        id: new_id(),
        name: new.name.trim().to_string(),
        code,
        credits: new.credits,
        hours_per_week: new.hours_per_week,
        teacher: new.teacher.trim().to_string(),
        department: new.department.trim().to_string(),
    };
    subjects.push(subject.clone());
    info!("Added subject {} ({})", subject.code, subject.name);
    Ok(subject)
}
