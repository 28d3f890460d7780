use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use hubdesk_complaints::domain::repository::{
    AttachmentRepository, AuditLogRepository, BlobStore, ComplaintRepository, MessageRepository,
    ProfileRepository,
};
use hubdesk_complaints::domain::types::{
    Attachment, AuditEntry, Complaint, ComplaintFilter, ComplaintSortBy, Message, Profile,
};
use hubdesk_complaints::error::ComplaintsServiceError;
use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::{PageRequest, Sort};
use hubdesk_domain::policy::Caller;
use hubdesk_domain::role::Role;

// ── MockProfileRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ComplaintsServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), ComplaintsServiceError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<(), ComplaintsServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(p) = profiles.iter_mut().find(|p| p.id == id) {
            if let Some(name) = name {
                p.name = name.to_owned();
            }
            if let Some(phone) = phone {
                p.phone = Some(phone.to_owned());
            }
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_role_flags(
        &self,
        id: Uuid,
        role: Option<Role>,
        is_verified: Option<bool>,
    ) -> Result<(), ComplaintsServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(p) = profiles.iter_mut().find(|p| p.id == id) {
            if let Some(role) = role {
                p.role = role;
            }
            if let Some(v) = is_verified {
                p.is_verified = v;
            }
            p.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn find_names(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, String)>, ComplaintsServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| (p.id, p.name.clone()))
            .collect())
    }
}

// ── MockComplaintRepo ────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockComplaintRepo {
    pub complaints: Arc<Mutex<Vec<Complaint>>>,
}

impl MockComplaintRepo {
    pub fn new(complaints: Vec<Complaint>) -> Self {
        Self {
            complaints: Arc::new(Mutex::new(complaints)),
        }
    }
}

impl ComplaintRepository for MockComplaintRepo {
    async fn create(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError> {
        self.complaints.lock().unwrap().push(complaint.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError> {
        Ok(self
            .complaints
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(
        &self,
        submitter: Option<Uuid>,
        filter: &ComplaintFilter,
        sort_by: ComplaintSortBy,
        page: PageRequest,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let matches_search = |c: &Complaint| {
            filter.search.as_deref().is_none_or(|needle| {
                c.title.contains(needle) || c.description.contains(needle)
            })
        };
        let mut rows: Vec<Complaint> = self
            .complaints
            .lock()
            .unwrap()
            .iter()
            .filter(|c| submitter.is_none_or(|s| c.user_id == Some(s)))
            .filter(|c| filter.status.is_none_or(|s| c.status == s))
            .filter(|c| filter.priority.is_none_or(|p| c.priority == p))
            .filter(|c| filter.hub.as_deref().is_none_or(|h| c.hub == h))
            .filter(|c| matches_search(c))
            .cloned()
            .collect();
        let ComplaintSortBy::CreatedAt(sort) = sort_by;
        rows.sort_by_key(|c| c.created_at);
        if matches!(sort, Sort::Desc) {
            rows.reverse();
        }
        let page = page.clamped();
        Ok(rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: Status,
    ) -> Result<Complaint, ComplaintsServiceError> {
        let mut complaints = self.complaints.lock().unwrap();
        let row = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        row.status = status;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn set_manager(
        &self,
        id: Uuid,
        manager_id: Option<Uuid>,
    ) -> Result<Complaint, ComplaintsServiceError> {
        let mut complaints = self.complaints.lock().unwrap();
        let row = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        row.manager_id = manager_id;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

// ── MockMessageRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockMessageRepo {
    pub messages: Arc<Mutex<Vec<Message>>>,
}

impl MessageRepository for MockMessageRepo {
    async fn create(&self, message: &Message) -> Result<(), ComplaintsServiceError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
        include_internal: bool,
    ) -> Result<Vec<Message>, ComplaintsServiceError> {
        let mut rows: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.complaint_id == complaint_id)
            .filter(|m| include_internal || !m.is_internal)
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.created_at);
        Ok(rows)
    }
}

// ── MockAttachmentRepo ───────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAttachmentRepo {
    pub attachments: Arc<Mutex<Vec<Attachment>>>,
}

impl AttachmentRepository for MockAttachmentRepo {
    async fn create(&self, attachment: &Attachment) -> Result<(), ComplaintsServiceError> {
        self.attachments.lock().unwrap().push(attachment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attachment>, ComplaintsServiceError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<Attachment>, ComplaintsServiceError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.complaint_id == complaint_id)
            .cloned()
            .collect())
    }

    async fn count_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<u64, ComplaintsServiceError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.complaint_id == complaint_id)
            .count() as u64)
    }
}

// ── MockAuditRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAuditRepo {
    pub entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl AuditLogRepository for MockAuditRepo {
    async fn append(&self, entry: &AuditEntry) -> Result<(), ComplaintsServiceError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<AuditEntry>, ComplaintsServiceError> {
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let page = page.clamped();
        Ok(entries
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect())
    }
}

// ── MockBlobStore ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockBlobStore {
    pub blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl BlobStore for MockBlobStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), ComplaintsServiceError> {
        self.blobs
            .lock()
            .unwrap()
            .insert(key.to_owned(), data.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, ComplaintsServiceError> {
        self.blobs
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or(ComplaintsServiceError::AttachmentNotFound)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn student() -> Caller {
    Caller::new(Uuid::now_v7(), Role::Student)
}

pub fn manager() -> Caller {
    Caller::new(Uuid::now_v7(), Role::Manager)
}

pub fn admin() -> Caller {
    Caller::new(Uuid::now_v7(), Role::Admin)
}

pub fn test_profile(caller: Caller, name: &str) -> Profile {
    Profile {
        id: caller.id,
        name: name.to_owned(),
        role: caller.role,
        hub: Some("Kochi Hub".to_owned()),
        phone: None,
        is_verified: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_complaint(user_id: Option<Uuid>) -> Complaint {
    Complaint {
        id: Uuid::now_v7(),
        user_id,
        manager_id: None,
        title: "Broken AC in Lab 3".to_owned(),
        description: "The air conditioner in Lab 3 has not worked for a week now.".to_owned(),
        category: Category::Facilities,
        hub: "Kochi Hub".to_owned(),
        room: Some("Lab 3".to_owned()),
        priority: Priority::Medium,
        status: Status::New,
        is_anonymous: user_id.is_none(),
        sla_due_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
