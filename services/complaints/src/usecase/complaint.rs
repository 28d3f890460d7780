use chrono::{DateTime, Utc};
use uuid::Uuid;

use hubdesk_domain::complaint::{self, Category, Priority, Status};
use hubdesk_domain::pagination::PageRequest;
use hubdesk_domain::policy::{self, Caller};

use crate::domain::repository::{AuditLogRepository, ComplaintRepository, ProfileRepository};
use crate::domain::types::{Complaint, ComplaintFilter, ComplaintSortBy, ComplaintView};
use crate::error::ComplaintsServiceError;

/// Resolve submitter and manager display names for a page of complaints with a
/// single profile lookup.
async fn resolve_views<P: ProfileRepository>(
    profiles: &P,
    complaints: Vec<Complaint>,
) -> Result<Vec<ComplaintView>, ComplaintsServiceError> {
    let mut ids: Vec<Uuid> = complaints
        .iter()
        .flat_map(|c| [c.user_id, c.manager_id])
        .flatten()
        .collect();
    ids.sort_unstable();
    ids.dedup();

    let names = profiles.find_names(&ids).await?;
    let name_of = |id: Option<Uuid>| {
        id.and_then(|id| {
            names
                .iter()
                .find(|(nid, _)| *nid == id)
                .map(|(_, name)| name.clone())
        })
    };

    Ok(complaints
        .into_iter()
        .map(|complaint| ComplaintView {
            submitter_name: name_of(complaint.user_id),
            manager_name: name_of(complaint.manager_id),
            complaint,
        })
        .collect())
}

// ── CreateComplaint ──────────────────────────────────────────────────────────

pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub hub: String,
    pub room: Option<String>,
    pub priority: Priority,
    pub is_anonymous: bool,
    pub sla_due_at: Option<DateTime<Utc>>,
}

pub struct CreateComplaintUseCase<C: ComplaintRepository> {
    pub complaints: C,
}

impl<C: ComplaintRepository> CreateComplaintUseCase<C> {
    pub async fn execute(
        &self,
        caller: Caller,
        draft: ComplaintDraft,
    ) -> Result<Complaint, ComplaintsServiceError> {
        if !complaint::validate_title(&draft.title) {
            return Err(ComplaintsServiceError::InvalidTitle);
        }
        if !complaint::validate_description(&draft.description) {
            return Err(ComplaintsServiceError::InvalidDescription);
        }
        if !complaint::validate_hub(&draft.hub) {
            return Err(ComplaintsServiceError::InvalidHub);
        }

        // Anonymous complaints never record the submitter.
        let submitter = (!draft.is_anonymous).then_some(caller.id);
        if !policy::can_create_complaint(&caller, submitter, draft.is_anonymous) {
            return Err(ComplaintsServiceError::Forbidden);
        }

        let now = Utc::now();
        let row = Complaint {
            id: Uuid::now_v7(),
            user_id: submitter,
            manager_id: None,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            hub: draft.hub,
            room: draft.room,
            priority: draft.priority,
            status: Status::New,
            is_anonymous: draft.is_anonymous,
            sla_due_at: draft.sla_due_at,
            created_at: now,
            updated_at: now,
        };
        self.complaints.create(&row).await?;
        Ok(row)
    }
}

// ── ListComplaints ───────────────────────────────────────────────────────────

pub struct ListComplaintsUseCase<C: ComplaintRepository, P: ProfileRepository> {
    pub complaints: C,
    pub profiles: P,
}

impl<C: ComplaintRepository, P: ProfileRepository> ListComplaintsUseCase<C, P> {
    pub async fn execute(
        &self,
        caller: Caller,
        filter: ComplaintFilter,
        sort_by: ComplaintSortBy,
        page: PageRequest,
    ) -> Result<Vec<ComplaintView>, ComplaintsServiceError> {
        // Students only ever see rows they own; managers and admins see every
        // hub. There is no in-between.
        let submitter = (!caller.role.is_elevated()).then_some(caller.id);
        let rows = self
            .complaints
            .list(submitter, &filter, sort_by, page.clamped())
            .await?;
        resolve_views(&self.profiles, rows).await
    }
}

// ── GetComplaint ─────────────────────────────────────────────────────────────

pub struct GetComplaintUseCase<C: ComplaintRepository, P: ProfileRepository> {
    pub complaints: C,
    pub profiles: P,
}

impl<C: ComplaintRepository, P: ProfileRepository> GetComplaintUseCase<C, P> {
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
    ) -> Result<ComplaintView, ComplaintsServiceError> {
        let row = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        // A row the caller may not read is indistinguishable from a row that
        // does not exist.
        if !policy::can_read_complaint(&caller, row.user_id) {
            return Err(ComplaintsServiceError::ComplaintNotFound);
        }
        let mut views = resolve_views(&self.profiles, vec![row]).await?;
        views
            .pop()
            .ok_or(ComplaintsServiceError::ComplaintNotFound)
    }
}

// ── UpdateStatus ─────────────────────────────────────────────────────────────

pub struct UpdateStatusUseCase<C: ComplaintRepository, A: AuditLogRepository> {
    pub complaints: C,
    pub audit: A,
}

impl<C: ComplaintRepository, A: AuditLogRepository> UpdateStatusUseCase<C, A> {
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
        status: Status,
    ) -> Result<Complaint, ComplaintsServiceError> {
        if !policy::can_write_complaint(&caller) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        let existing = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        // Any status may follow any other; reopening a closed complaint is a
        // legitimate triage action.
        let updated = self.complaints.update_status(complaint_id, status).await?;

        let entry = audit_entry(
            caller.id,
            "complaint.status_updated",
            serde_json::json!({
                "complaint_id": complaint_id,
                "from": existing.status.as_str(),
                "to": status.as_str(),
            }),
        );
        if let Err(err) = self.audit.append(&entry).await {
            tracing::warn!(action = %entry.action, error = %err, "failed to append audit entry");
        }
        Ok(updated)
    }
}

// ── AssignComplaint ──────────────────────────────────────────────────────────

pub struct AssignComplaintUseCase<C: ComplaintRepository, A: AuditLogRepository> {
    pub complaints: C,
    pub audit: A,
}

impl<C: ComplaintRepository, A: AuditLogRepository> AssignComplaintUseCase<C, A> {
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
        manager_id: Option<Uuid>,
    ) -> Result<Complaint, ComplaintsServiceError> {
        if !policy::can_write_complaint(&caller) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        self.complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        let updated = self.complaints.set_manager(complaint_id, manager_id).await?;

        let entry = audit_entry(
            caller.id,
            "complaint.assigned",
            serde_json::json!({
                "complaint_id": complaint_id,
                "manager_id": manager_id,
            }),
        );
        if let Err(err) = self.audit.append(&entry).await {
            tracing::warn!(action = %entry.action, error = %err, "failed to append audit entry");
        }
        Ok(updated)
    }
}

fn audit_entry(
    actor_id: Uuid,
    action: &str,
    details: serde_json::Value,
) -> crate::domain::types::AuditEntry {
    crate::domain::types::AuditEntry {
        id: Uuid::now_v7(),
        actor_id: Some(actor_id),
        action: action.to_owned(),
        details,
        created_at: Utc::now(),
    }
}
