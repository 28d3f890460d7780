use chrono::{DateTime, Utc};
use uuid::Uuid;

use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::Sort;
use hubdesk_domain::role::Role;

/// Profile owned by the complaints service.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub hub: Option<String>,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A complaint row. `user_id` is `None` when the complaint is anonymous — the
/// submitter identity is never recorded at write time.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub hub: String,
    pub room: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub is_anonymous: bool,
    pub sla_due_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A complaint enriched with resolved profile names for dashboard views.
#[derive(Debug, Clone)]
pub struct ComplaintView {
    pub complaint: Complaint,
    pub submitter_name: Option<String>,
    pub manager_name: Option<String>,
}

/// Filters for the manager/admin dashboard listing.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub hub: Option<String>,
    /// Free-text search over title and description.
    pub search: Option<String>,
}

/// Sort options for complaint list queries.
#[derive(Debug, Clone, Copy)]
pub enum ComplaintSortBy {
    CreatedAt(Sort),
}

impl Default for ComplaintSortBy {
    fn default() -> Self {
        Self::CreatedAt(Sort::Desc)
    }
}

impl ComplaintSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            _ => None,
        }
    }
}

/// Attachment metadata; the blob lives in the attachment store under
/// `file_path`.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub uploader_id: Option<Uuid>,
    pub file_path: String,
    pub file_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}

/// A per-complaint thread message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub body: String,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

/// A message with its sender name resolved for the thread view.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub message: Message,
    pub sender_name: Option<String>,
}

/// One audit trail entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: Uuid,
    pub actor_id: Option<Uuid>,
    pub action: String,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
