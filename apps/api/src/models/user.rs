use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Landing page after a successful sign-in or sign-up.
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every account type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserBase {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    #[serde(flatten)]
    pub base: UserBase,
    pub student_id: String,
    pub stream: String,
    pub year: u8,
    pub semester: u8,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherProfile {
    #[serde(flatten)]
    pub base: UserBase,
    pub teacher_id: String,
    pub subjects: Vec<String>,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    #[serde(flatten)]
    pub base: UserBase,
    pub admin_id: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    Student(StudentProfile),
    Teacher(TeacherProfile),
    Admin(AdminProfile),
}

impl User {
    pub fn role(&self) -> Role {
        match self {
            User::Student(_) => Role::Student,
            User::Teacher(_) => Role::Teacher,
            User::Admin(_) => Role::Admin,
        }
    }

    pub fn base(&self) -> &UserBase {
        match self {
            User::Student(p) => &p.base,
            User::Teacher(p) => &p.base,
            User::Admin(p) => &p.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut UserBase {
        match self {
            User::Student(p) => &mut p.base,
            User::Teacher(p) => &mut p.base,
            User::Admin(p) => &mut p.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_role_tag_and_flat_base() {
        let user = User::Admin(AdminProfile {
            base: UserBase {
                id: "3".into(),
                name: "Admin".into(),
                email: "a@b.edu".into(),
                avatar: None,
            },
            admin_id: "ADM1".into(),
            permissions: vec!["manage_faculty".into()],
        });
        let v = serde_json::to_value(&user).unwrap();
        assert_eq!(v["role"], "admin");
        assert_eq!(v["name"], "Admin");
        assert_eq!(v["admin_id"], "ADM1");
    }

    #[test]
    fn test_dashboard_path() {
        assert_eq!(Role::Teacher.dashboard_path(), "/teacher/dashboard");
    }
}
