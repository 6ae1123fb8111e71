// Subject catalog, faculty roster, teacher directory and exam schedule.

pub mod faculty;
pub mod handlers;
pub mod subjects;

/// Department filter value that disables filtering.
pub const ALL_DEPARTMENTS: &str = "all";

/// True when `department` passes the optional filter.
pub(crate) fn department_matches(filter: Option<&str>, department: &str) -> bool {
    match filter.map(str::trim) {
        None | Some("") | Some(ALL_DEPARTMENTS) => true,
        Some(wanted) => wanted == department,
    }
}

/// Lowercased search term, or `None` when the search is blank.
pub(crate) fn search_term(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_filter() {
        assert!(department_matches(None, "Civil Engineering"));
        assert!(department_matches(Some("all"), "Civil Engineering"));
        assert!(department_matches(Some("Civil Engineering"), "Civil Engineering"));
        assert!(!department_matches(Some("Computer Science"), "Civil Engineering"));
    }

    #[test]
    fn test_blank_search_is_none() {
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(Some(" Data ")).as_deref(), Some("data"));
    }
}
