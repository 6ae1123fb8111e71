// Account self-service: profile edits and password changes for any stored
// user. Password changes are acknowledged but never checked against a stored
// credential; every demo account keeps the demo password.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::notification::NotificationKind;
use crate::models::user::User;
use crate::store::Store;
use crate::validation::{FieldErrors, MIN_PASSWORD_LEN};

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    /// Only student accounts carry a phone number; ignored for other roles.
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChanged {
    pub message: String,
}

pub async fn get_user(store: &Store, id: &str) -> Result<User, AppError> {
    store
        .users
        .read()
        .await
        .iter()
        .find(|u| u.base().id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
}

pub async fn update_profile(
    store: &Store,
    id: &str,
    update: &ProfileUpdate,
) -> Result<User, AppError> {
    let mut errs = FieldErrors::new();
    errs.min_len("name", &update.name, 2, "Name must be at least 2 characters");
    errs.email("email", &update.email);
    AppError::check_fields(errs.into_inner())?;

    let email = update.email.trim();
    let updated = {
        let mut users = store.users.write().await;
        if users
            .iter()
            .any(|u| u.base().id != id && u.base().email.eq_ignore_ascii_case(email))
        {
            return Err(AppError::Conflict(format!(
                "An account with email {email} already exists"
            )));
        }
        let user = users
            .iter_mut()
            .find(|u| u.base().id == id)
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

        let base = user.base_mut();
        base.name = update.name.trim().to_string();
        base.email = email.to_string();
        if let (User::Student(profile), Some(phone)) = (&mut *user, update.phone.as_deref()) {
            profile.phone = phone.trim().to_string();
        }
        user.clone()
    };

    info!("Updated {} profile {id}", updated.role());
    store
        .notifications
        .push(
            "Profile Updated",
            "Your profile has been successfully updated.",
            NotificationKind::Success,
        )
        .await;
    Ok(updated)
}

pub async fn change_password(
    store: &Store,
    id: &str,
    change: &PasswordChange,
) -> Result<PasswordChanged, AppError> {
    let mut errs = FieldErrors::new();
    let rules = [
        (
            "current_password",
            &change.current_password,
            "Current password must be at least 6 characters",
        ),
        (
            "new_password",
            &change.new_password,
            "New password must be at least 6 characters",
        ),
        (
            "confirm_password",
            &change.confirm_password,
            "Please confirm your new password",
        ),
    ];
    for (field, value, message) in rules {
        if value.chars().count() < MIN_PASSWORD_LEN {
            errs.push(field, message);
        }
    }
    if change.new_password != change.confirm_password {
        errs.push("confirm_password", "New passwords don't match");
    }
    AppError::check_fields(errs.into_inner())?;

    let user = get_user(store, id).await?;
    info!("Password changed for {} account {id}", user.role());
    store
        .notifications
        .push(
            "Password Updated",
            "Your password has been successfully updated.",
            NotificationKind::Success,
        )
        .await;
    Ok(PasswordChanged {
        message: "Your password has been successfully updated.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(name: &str, email: &str, phone: Option<&str>) -> ProfileUpdate {
        ProfileUpdate {
            name: name.into(),
            email: email.into(),
            phone: phone.map(str::to_string),
        }
    }

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[tokio::test]
    async fn test_update_student_profile() {
        let store = Store::seeded();
        let user = update_profile(
            &store,
            "1",
            &update(" Rahul S. ", "rahul@student.edu", Some("+91-9000000001")),
        )
        .await
        .unwrap();

        let User::Student(profile) = &user else {
            panic!("expected student, got {user:?}");
        };
        assert_eq!(profile.base.name, "Rahul S.");
        assert_eq!(profile.phone, "+91-9000000001");
        assert_eq!(profile.semester, 5);
        assert_eq!(get_user(&store, "1").await.unwrap(), user);
        assert_eq!(store.notifications.list().await[0].title, "Profile Updated");
    }

    #[tokio::test]
    async fn test_phone_ignored_for_teacher() {
        let store = Store::seeded();
        let user = update_profile(
            &store,
            "2",
            &update("Prof. Neha Verma", "neha.verma@college.edu", Some("123")),
        )
        .await
        .unwrap();
        assert!(matches!(user, User::Teacher(_)));
    }

    #[tokio::test]
    async fn test_update_profile_errors() {
        let store = Store::seeded();

        let err = update_profile(&store, "1", &update("R", "nope", None))
            .await
            .unwrap_err();
        let AppError::InvalidFields(fields) = err else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 2);

        let err = update_profile(&store, "42", &update("Someone", "x@y.edu", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = update_profile(&store, "1", &update("Rahul", "neha.verma@college.edu", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.notifications.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_change_password() {
        let store = Store::seeded();
        let done = change_password(&store, "3", &change("password123", "s3cret!", "s3cret!"))
            .await
            .unwrap();
        assert_eq!(done.message, "Your password has been successfully updated.");
        assert_eq!(store.notifications.list().await[0].title, "Password Updated");
    }

    #[tokio::test]
    async fn test_change_password_rules() {
        let store = Store::seeded();
        let err = change_password(&store, "3", &change("12345", "abcdef", "abcdeg"))
            .await
            .unwrap_err();
        let AppError::InvalidFields(fields) = err else {
            panic!("expected field errors");
        };
        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["current_password", "confirm_password"]);
        assert_eq!(fields[1].message, "New passwords don't match");

        let err = change_password(&store, "9", &change("password123", "abcdef", "abcdef"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
