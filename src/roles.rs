//! Caller roles and the list endpoint each one reads from.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Admin,
    Bursar,
    Teacher,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleError {
    Unknown(String),
    MissingStaffId,
}

impl fmt::Display for RoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleError::Unknown(raw) => write!(f, "Unknown role '{}'", raw),
            RoleError::MissingStaffId => write!(f, "No staff id stored for this session"),
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "bursar" => Ok(Role::Bursar),
            "teacher" => Ok(Role::Teacher),
            _ => Err(RoleError::Unknown(s.to_string())),
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Bursar => "bursar",
            Role::Teacher => "teacher",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Bursar => "Bursar",
            Role::Teacher => "Teacher",
        }
    }

    /// Only the bursar records payments from the details panel.
    pub fn can_add_payment(&self) -> bool {
        matches!(self, Role::Bursar)
    }

    pub fn can_add_students(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Path of the student list endpoint for `role`.
///
/// Teachers only see the students of their own classes, which requires the
/// staff id stored at login.
pub fn students_path(role: Role, staff_id: Option<u32>) -> Result<String, RoleError> {
    match role {
        Role::Admin | Role::Bursar => Ok("/students".to_string()),
        Role::Teacher => staff_id
            .map(|id| format!("/staff/{}/students", id))
            .ok_or(RoleError::MissingStaffId),
    }
}
