#![allow(async_fn_in_trait)]

use uuid::Uuid;

use hubdesk_domain::pagination::PageRequest;
use hubdesk_domain::role::Role;

use crate::domain::types::{
    Attachment, AuditEntry, Complaint, ComplaintFilter, ComplaintSortBy, Message, Profile,
};
use crate::error::ComplaintsServiceError;

/// Repository for caller profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ComplaintsServiceError>;

    async fn create(&self, profile: &Profile) -> Result<(), ComplaintsServiceError>;

    /// Update self-mutable contact fields. Refreshes `updated_at`.
    async fn update_contact(
        &self,
        id: Uuid,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<(), ComplaintsServiceError>;

    /// Admin-only role/verification update. Refreshes `updated_at`.
    async fn update_role_flags(
        &self,
        id: Uuid,
        role: Option<Role>,
        is_verified: Option<bool>,
    ) -> Result<(), ComplaintsServiceError>;

    /// Resolve display names for a set of profile ids. Unknown ids are simply
    /// absent from the result.
    async fn find_names(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, String)>, ComplaintsServiceError>;
}

/// Repository for complaint rows.
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError>;

    /// List complaints. `submitter` restricts to rows owned by that profile
    /// (the student path); `None` lists across all hubs (manager/admin path).
    async fn list(
        &self,
        submitter: Option<Uuid>,
        filter: &ComplaintFilter,
        sort_by: ComplaintSortBy,
        page: PageRequest,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError>;

    /// Set the status and refresh `updated_at`. Returns the updated row.
    async fn update_status(
        &self,
        id: Uuid,
        status: hubdesk_domain::complaint::Status,
    ) -> Result<Complaint, ComplaintsServiceError>;

    /// Set or clear the assigned manager and refresh `updated_at`. Returns the
    /// updated row.
    async fn set_manager(
        &self,
        id: Uuid,
        manager_id: Option<Uuid>,
    ) -> Result<Complaint, ComplaintsServiceError>;
}

/// Repository for the append-only message thread.
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &Message) -> Result<(), ComplaintsServiceError>;

    /// Messages of one complaint, chronological ascending. Internal notes are
    /// filtered out unless `include_internal`.
    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
        include_internal: bool,
    ) -> Result<Vec<Message>, ComplaintsServiceError>;
}

/// Repository for attachment metadata rows.
pub trait AttachmentRepository: Send + Sync {
    async fn create(&self, attachment: &Attachment) -> Result<(), ComplaintsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attachment>, ComplaintsServiceError>;

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<Attachment>, ComplaintsServiceError>;

    async fn count_by_complaint(&self, complaint_id: Uuid)
    -> Result<u64, ComplaintsServiceError>;
}

/// Repository for the audit trail.
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: &AuditEntry) -> Result<(), ComplaintsServiceError>;

    /// Entries newest first.
    async fn list(&self, page: PageRequest) -> Result<Vec<AuditEntry>, ComplaintsServiceError>;
}

/// Port for the attachment blob store. Keys are namespaced by complaint id
/// (`<complaint_id>/<upload_timestamp>.<ext>`) so per-complaint authorization
/// maps onto a prefix.
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), ComplaintsServiceError>;

    async fn get(&self, key: &str) -> Result<Vec<u8>, ComplaintsServiceError>;
}
