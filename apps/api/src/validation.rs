//! Field rules shared by every form-backed endpoint. Each check appends a
//! `FieldError` instead of failing fast, so a client sees all problems at once.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::errors::FieldError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !EMAIL_RE.is_match(value.trim()) {
            self.push(field, "Please enter a valid email address");
        }
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.push(field, message);
        }
    }

    pub fn required(&mut self, field: &str, value: &str, message: &str) {
        self.min_len(field, value, 1, message);
    }

    pub fn password(&mut self, field: &str, value: &str) {
        // Passwords are not trimmed.
        if value.chars().count() < MIN_PASSWORD_LEN {
            self.push(
                field,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
    }

    pub fn passwords_match(&mut self, password: &str, confirm: &str) {
        if password != confirm {
            self.push("confirm_password", "Passwords don't match");
        }
    }

    pub fn range<T: PartialOrd + std::fmt::Display>(
        &mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) {
        if value < min || value > max {
            self.push(field, format!("Must be between {min} and {max}"));
        }
    }

    /// Parses a `YYYY-MM-DD` date, recording an error when it does not parse.
    pub fn date(&mut self, field: &str, value: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                self.push(field, "Please select a date");
                None
            }
        }
    }

    /// Parses a zero-padded `HH:MM` clock time. `9:00` is rejected.
    pub fn clock_time(&mut self, field: &str, value: &str, message: &str) -> Option<NaiveTime> {
        let value = value.trim();
        match NaiveTime::parse_from_str(value, "%H:%M") {
            Ok(t) if t.format("%H:%M").to_string() == value => Some(t),
            _ => {
                self.push(field, message);
                None
            }
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        let mut errs = FieldErrors::new();
        errs.email("email", "rahul.sharma@student.edu");
        assert!(errs.is_empty());
    }

    #[test]
    fn test_email_rejects_missing_domain() {
        for bad in ["rahul", "rahul@", "rahul@edu", "a b@c.d", ""] {
            let mut errs = FieldErrors::new();
            errs.email("email", bad);
            assert!(!errs.is_empty(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_min_len_trims_whitespace() {
        let mut errs = FieldErrors::new();
        errs.min_len("name", "  a  ", 2, "too short");
        assert_eq!(errs.into_inner()[0].message, "too short");
    }

    #[test]
    fn test_password_rules() {
        let mut errs = FieldErrors::new();
        errs.password("password", "12345");
        errs.passwords_match("123456", "1234567");
        let errs = errs.into_inner();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[1].field, "confirm_password");
    }

    #[test]
    fn test_range_inclusive() {
        let mut errs = FieldErrors::new();
        errs.range("year", 1, 1, 4);
        errs.range("year", 4, 1, 4);
        assert!(errs.is_empty());
        errs.range("semester", 9, 1, 8);
        assert!(!errs.is_empty());
    }

    #[test]
    fn test_date_and_time_parsing() {
        let mut errs = FieldErrors::new();
        assert!(errs.date("date", "2024-02-15").is_some());
        assert!(errs.clock_time("lunch", "12:00", "bad").is_some());
        assert!(errs.is_empty());
        assert!(errs.date("date", "15/02/2024").is_none());
        assert!(errs.clock_time("lunch", "noon", "bad").is_none());
        assert_eq!(errs.into_inner().len(), 2);
    }

    #[test]
    fn test_clock_time_must_be_zero_padded() {
        let mut errs = FieldErrors::new();
        assert!(errs.clock_time("lunch", "9:00", "bad").is_none());
        assert!(errs.clock_time("lunch", "13:5", "bad").is_none());
        assert!(errs.clock_time("lunch", "09:00", "bad").is_some());
        assert_eq!(errs.into_inner().len(), 2);
    }
}
