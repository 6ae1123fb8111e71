use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::fixtures::{demo_user, DEFAULT_AVATAR};
use crate::models::user::{Role, StudentProfile, TeacherProfile, User, UserBase};
use crate::store::{new_id, Store};
use crate::validation::FieldErrors;

/// The one password every demo account accepts.
pub const DEMO_PASSWORD: &str = "password123";

pub const RECOVERY_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Union of the student and teacher sign-up forms. Which fields are required
/// depends on the role being registered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: Option<String>,
    pub stream: Option<String>,
    pub year: Option<u8>,
    pub semester: Option<u8>,
    pub teacher_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub redirect: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecoveryEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecoveryCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecoveryResetRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStep {
    CodeSent,
    CodeVerified,
    PasswordReset,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecoveryResponse {
    pub step: RecoveryStep,
    pub message: String,
}

/// Validates the login form and checks the password.
/// The email is only format-checked; the returned account is the demo user of
/// the requested role.
pub fn authenticate(req: &LoginRequest) -> Result<AuthResponse, AppError> {
    let mut errs = FieldErrors::new();
    errs.email("email", &req.email);
    errs.password("password", &req.password);
    AppError::check_fields(errs.into_inner())?;

    if req.password != DEMO_PASSWORD {
        warn!("Rejected {} login for {}", req.role, req.email);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    info!("{} signed in as {}", req.email, req.role);
    Ok(AuthResponse {
        user: demo_user(req.role),
        redirect: req.role.dashboard_path(),
    })
}

/// Registers a new student or teacher and adds the account to the store.
/// Admin accounts can never self-register.
pub async fn register(
    store: &Store,
    role: Role,
    form: &RegisterForm,
) -> Result<AuthResponse, AppError> {
    if role == Role::Admin {
        warn!("Blocked admin self-registration for {}", form.email);
        return Err(AppError::AdminRegistrationBlocked);
    }

    let mut errs = FieldErrors::new();
    errs.min_len("name", &form.name, 2, "Name must be at least 2 characters");
    errs.email("email", &form.email);
    errs.password("password", &form.password);
    errs.passwords_match(&form.password, &form.confirm_password);

    match role {
        Role::Student => {
            errs.min_len(
                "phone",
                form.phone.as_deref().unwrap_or_default(),
                10,
                "Please enter a valid phone number",
            );
            errs.required(
                "stream",
                form.stream.as_deref().unwrap_or_default(),
                "Please select a stream",
            );
            match form.year {
                Some(year) => errs.range("year", year, 1, 4),
                None => errs.push("year", "Year is required"),
            }
            match form.semester {
                Some(semester) => errs.range("semester", semester, 1, 8),
                None => errs.push("semester", "Semester is required"),
            }
        }
        Role::Teacher => errs.required(
            "teacher_id",
            form.teacher_id.as_deref().unwrap_or_default(),
            "Teacher ID is required",
        ),
        Role::Admin => {}
    }
    AppError::check_fields(errs.into_inner())?;

    let email = form.email.trim();
    let mut users = store.users.write().await;
    if users
        .iter()
        .any(|u| u.base().email.eq_ignore_ascii_case(email))
    {
        return Err(AppError::Conflict(format!(
            "An account with email {email} already exists"
        )));
    }

    let id = new_id();
    let base = UserBase {
        id: id.clone(),
        name: form.name.trim().to_string(),
        email: email.to_string(),
        avatar: Some(DEFAULT_AVATAR.to_string()),
    };
    let user = match role {
        Role::Student => User::Student(StudentProfile {
            base,
            student_id: format!("STU{}", id.to_uppercase()),
            stream: form.stream.clone().unwrap_or_default(),
            year: form.year.unwrap_or(1),
            semester: form.semester.unwrap_or(1),
            phone: form.phone.clone().unwrap_or_default(),
        }),
        _ => User::Teacher(TeacherProfile {
            base,
            teacher_id: form.teacher_id.clone().unwrap_or_default(),
            subjects: Vec::new(),
            department: String::new(),
        }),
    };

    users.push(user.clone());
    info!("Registered new {role} account {}", user.base().id);
    Ok(AuthResponse {
        user,
        redirect: role.dashboard_path(),
    })
}

pub fn request_recovery_code(req: &RecoveryEmailRequest) -> Result<RecoveryResponse, AppError> {
    let mut errs = FieldErrors::new();
    errs.email("email", &req.email);
    AppError::check_fields(errs.into_inner())?;

    info!("Recovery code requested for {}", req.email);
    Ok(RecoveryResponse {
        step: RecoveryStep::CodeSent,
        message: format!("A security code has been sent to {}", req.email.trim()),
    })
}

/// Any code of the right length is accepted; no code is ever issued.
pub fn verify_recovery_code(req: &RecoveryCodeRequest) -> Result<RecoveryResponse, AppError> {
    let mut errs = FieldErrors::new();
    errs.email("email", &req.email);
    if req.code.trim().chars().count() != RECOVERY_CODE_LEN {
        errs.push("code", format!("Security code must be {RECOVERY_CODE_LEN} digits"));
    }
    AppError::check_fields(errs.into_inner())?;

    Ok(RecoveryResponse {
        step: RecoveryStep::CodeVerified,
        message: "Security code verified".to_string(),
    })
}

pub fn reset_password(req: &RecoveryResetRequest) -> Result<RecoveryResponse, AppError> {
    let mut errs = FieldErrors::new();
    errs.email("email", &req.email);
    errs.password("password", &req.password);
    errs.passwords_match(&req.password, &req.confirm_password);
    AppError::check_fields(errs.into_inner())?;

    info!("Password reset completed for {}", req.email);
    Ok(RecoveryResponse {
        step: RecoveryStep::PasswordReset,
        message: "Your password has been reset. You can now sign in.".to_string(),
    })
}
