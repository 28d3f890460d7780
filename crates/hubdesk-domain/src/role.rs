//! Caller role types.

use serde::{Deserialize, Serialize};

/// Permission level of an authenticated caller.
///
/// Wire format: lowercase string (`student`, `manager`, `admin`), both in the
/// gateway identity header and in the `profiles.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Manager,
    Admin,
}

impl Role {
    /// Parse the wire string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Self::Student),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Managers and admins share full cross-hub read access and exclusive
    /// write access to status and assignment fields.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}
