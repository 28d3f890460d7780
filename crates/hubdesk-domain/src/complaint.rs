//! Complaint enumerations and draft validation rules.

use serde::{Deserialize, Serialize};

/// Complaint workflow status.
///
/// Transitions are deliberately unordered: a manager/admin may set any status
/// from any other (manual override capability carried over from the original
/// workflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    New,
    Acknowledged,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "acknowledged" => Some(Self::Acknowledged),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Acknowledged => "acknowledged",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

/// Complaint priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Complaint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Facilities,
    Equipment,
    Network,
    Classroom,
    Hygiene,
    Safety,
    Other,
}

impl Category {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "facilities" => Some(Self::Facilities),
            "equipment" => Some(Self::Equipment),
            "network" => Some(Self::Network),
            "classroom" => Some(Self::Classroom),
            "hygiene" => Some(Self::Hygiene),
            "safety" => Some(Self::Safety),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facilities => "facilities",
            Self::Equipment => "equipment",
            Self::Network => "network",
            Self::Classroom => "classroom",
            Self::Hygiene => "hygiene",
            Self::Safety => "safety",
            Self::Other => "other",
        }
    }
}

/// Title length bounds, inclusive (characters, not bytes).
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 200;

/// Description length bounds, inclusive.
pub const DESCRIPTION_MIN_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Per-file upload ceiling, inclusive.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Attachments allowed per complaint.
pub const MAX_ATTACHMENTS_PER_COMPLAINT: u64 = 5;

/// Validate a complaint title: 5-200 characters.
pub fn validate_title(title: &str) -> bool {
    let len = title.chars().count();
    (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len)
}

/// Validate a complaint description: 20-2000 characters.
pub fn validate_description(description: &str) -> bool {
    let len = description.chars().count();
    (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len)
}

/// Validate a hub name: must not be blank.
pub fn validate_hub(hub: &str) -> bool {
    !hub.trim().is_empty()
}
