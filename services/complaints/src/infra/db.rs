use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use hubdesk_complaints_schema::{attachments, audit_logs, complaints, messages, profiles};
use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::{PageRequest, Sort};
use hubdesk_domain::role::Role;

use crate::domain::repository::{
    AttachmentRepository, AuditLogRepository, ComplaintRepository, MessageRepository,
    ProfileRepository,
};
use crate::domain::types::{
    Attachment, AuditEntry, Complaint, ComplaintFilter, ComplaintSortBy, Message, Profile,
};
use crate::error::ComplaintsServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ComplaintsServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        model.map(profile_from_model).transpose()
    }

    async fn create(&self, profile: &Profile) -> Result<(), ComplaintsServiceError> {
        profiles::ActiveModel {
            id: Set(profile.id),
            name: Set(profile.name.clone()),
            role: Set(profile.role.as_str().to_owned()),
            hub: Set(profile.hub.clone()),
            phone: Set(profile.phone.clone()),
            is_verified: Set(profile.is_verified),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create profile")?;
        Ok(())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<(), ComplaintsServiceError> {
        let mut am = profiles::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_name) = name {
            am.name = Set(new_name.to_owned());
        }
        if let Some(new_phone) = phone {
            am.phone = Set(Some(new_phone.to_owned()));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db)
            .await
            .context("update profile contact fields")?;
        Ok(())
    }

    async fn update_role_flags(
        &self,
        id: Uuid,
        role: Option<Role>,
        is_verified: Option<bool>,
    ) -> Result<(), ComplaintsServiceError> {
        let mut am = profiles::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_role) = role {
            am.role = Set(new_role.as_str().to_owned());
        }
        if let Some(verified) = is_verified {
            am.is_verified = Set(verified);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db)
            .await
            .context("update profile role/verification")?;
        Ok(())
    }

    async fn find_names(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, String)>, ComplaintsServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = profiles::Entity::find()
            .filter(profiles::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find profile names")?;
        Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
    }
}

fn profile_from_model(model: profiles::Model) -> Result<Profile, ComplaintsServiceError> {
    let role = Role::from_str(&model.role)
        .ok_or_else(|| anyhow!("unknown role {:?} in profile {}", model.role, model.id))?;
    Ok(Profile {
        id: model.id,
        name: model.name,
        role,
        hub: model.hub,
        phone: model.phone,
        is_verified: model.is_verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Complaint repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbComplaintRepository {
    pub db: DatabaseConnection,
}

impl ComplaintRepository for DbComplaintRepository {
    async fn create(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError> {
        complaints::ActiveModel {
            id: Set(complaint.id),
            user_id: Set(complaint.user_id),
            manager_id: Set(complaint.manager_id),
            title: Set(complaint.title.clone()),
            description: Set(complaint.description.clone()),
            category: Set(complaint.category.as_str().to_owned()),
            hub: Set(complaint.hub.clone()),
            room: Set(complaint.room.clone()),
            priority: Set(complaint.priority.as_str().to_owned()),
            status: Set(complaint.status.as_str().to_owned()),
            is_anonymous: Set(complaint.is_anonymous),
            sla_due_at: Set(complaint.sla_due_at),
            created_at: Set(complaint.created_at),
            updated_at: Set(complaint.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create complaint")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError> {
        let model = complaints::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find complaint by id")?;
        model.map(complaint_from_model).transpose()
    }

    async fn list(
        &self,
        submitter: Option<Uuid>,
        filter: &ComplaintFilter,
        sort_by: ComplaintSortBy,
        page: PageRequest,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let page = page.clamped();
        let mut query = complaints::Entity::find();
        if let Some(submitter) = submitter {
            query = query.filter(complaints::Column::UserId.eq(submitter));
        }
        if let Some(status) = filter.status {
            query = query.filter(complaints::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(complaints::Column::Priority.eq(priority.as_str()));
        }
        if let Some(hub) = &filter.hub {
            query = query.filter(complaints::Column::Hub.eq(hub));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(complaints::Column::Title.contains(search))
                    .add(complaints::Column::Description.contains(search)),
            );
        }
        query = match sort_by {
            ComplaintSortBy::CreatedAt(Sort::Desc) => {
                query.order_by_desc(complaints::Column::CreatedAt)
            }
            ComplaintSortBy::CreatedAt(Sort::Asc) => {
                query.order_by_asc(complaints::Column::CreatedAt)
            }
        };
        let models = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list complaints")?;
        models.into_iter().map(complaint_from_model).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: Status,
    ) -> Result<Complaint, ComplaintsServiceError> {
        let am = complaints::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        let model = am
            .update(&self.db)
            .await
            .context("update complaint status")?;
        complaint_from_model(model)
    }

    async fn set_manager(
        &self,
        id: Uuid,
        manager_id: Option<Uuid>,
    ) -> Result<Complaint, ComplaintsServiceError> {
        let am = complaints::ActiveModel {
            id: Set(id),
            manager_id: Set(manager_id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        let model = am
            .update(&self.db)
            .await
            .context("assign complaint manager")?;
        complaint_from_model(model)
    }
}

fn complaint_from_model(model: complaints::Model) -> Result<Complaint, ComplaintsServiceError> {
    let category = Category::from_str(&model.category)
        .ok_or_else(|| anyhow!("unknown category {:?} in complaint {}", model.category, model.id))?;
    let priority = Priority::from_str(&model.priority)
        .ok_or_else(|| anyhow!("unknown priority {:?} in complaint {}", model.priority, model.id))?;
    let status = Status::from_str(&model.status)
        .ok_or_else(|| anyhow!("unknown status {:?} in complaint {}", model.status, model.id))?;
    Ok(Complaint {
        id: model.id,
        user_id: model.user_id,
        manager_id: model.manager_id,
        title: model.title,
        description: model.description,
        category,
        hub: model.hub,
        room: model.room,
        priority,
        status,
        is_anonymous: model.is_anonymous,
        sla_due_at: model.sla_due_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Message repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMessageRepository {
    pub db: DatabaseConnection,
}

impl MessageRepository for DbMessageRepository {
    async fn create(&self, message: &Message) -> Result<(), ComplaintsServiceError> {
        messages::ActiveModel {
            id: Set(message.id),
            complaint_id: Set(message.complaint_id),
            sender_id: Set(message.sender_id),
            body: Set(message.body.clone()),
            is_internal: Set(message.is_internal),
            created_at: Set(message.created_at),
        }
        .insert(&self.db)
        .await
        .context("create message")?;
        Ok(())
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
        include_internal: bool,
    ) -> Result<Vec<Message>, ComplaintsServiceError> {
        let mut query =
            messages::Entity::find().filter(messages::Column::ComplaintId.eq(complaint_id));
        if !include_internal {
            query = query.filter(messages::Column::IsInternal.eq(false));
        }
        let models = query
            .order_by_asc(messages::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list messages")?;
        Ok(models.into_iter().map(message_from_model).collect())
    }
}

fn message_from_model(model: messages::Model) -> Message {
    Message {
        id: model.id,
        complaint_id: model.complaint_id,
        sender_id: model.sender_id,
        body: model.body,
        is_internal: model.is_internal,
        created_at: model.created_at,
    }
}

// ── Attachment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAttachmentRepository {
    pub db: DatabaseConnection,
}

impl AttachmentRepository for DbAttachmentRepository {
    async fn create(&self, attachment: &Attachment) -> Result<(), ComplaintsServiceError> {
        attachments::ActiveModel {
            id: Set(attachment.id),
            complaint_id: Set(attachment.complaint_id),
            uploader_id: Set(attachment.uploader_id),
            file_path: Set(attachment.file_path.clone()),
            file_name: Set(attachment.file_name.clone()),
            mime_type: Set(attachment.mime_type.clone()),
            file_size: Set(attachment.file_size),
            created_at: Set(attachment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create attachment")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Attachment>, ComplaintsServiceError> {
        let model = attachments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find attachment by id")?;
        Ok(model.map(attachment_from_model))
    }

    async fn list_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<Vec<Attachment>, ComplaintsServiceError> {
        let models = attachments::Entity::find()
            .filter(attachments::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(attachments::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list attachments")?;
        Ok(models.into_iter().map(attachment_from_model).collect())
    }

    async fn count_by_complaint(
        &self,
        complaint_id: Uuid,
    ) -> Result<u64, ComplaintsServiceError> {
        use sea_orm::PaginatorTrait as _;

        let count = attachments::Entity::find()
            .filter(attachments::Column::ComplaintId.eq(complaint_id))
            .count(&self.db)
            .await
            .context("count attachments")?;
        Ok(count)
    }
}

fn attachment_from_model(model: attachments::Model) -> Attachment {
    Attachment {
        id: model.id,
        complaint_id: model.complaint_id,
        uploader_id: model.uploader_id,
        file_path: model.file_path,
        file_name: model.file_name,
        mime_type: model.mime_type,
        file_size: model.file_size,
        created_at: model.created_at,
    }
}

// ── Audit log repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuditLogRepository {
    pub db: DatabaseConnection,
}

impl AuditLogRepository for DbAuditLogRepository {
    async fn append(&self, entry: &AuditEntry) -> Result<(), ComplaintsServiceError> {
        audit_logs::ActiveModel {
            id: Set(entry.id),
            actor_id: Set(entry.actor_id),
            action: Set(entry.action.clone()),
            details: Set(entry.details.clone()),
            created_at: Set(entry.created_at),
        }
        .insert(&self.db)
        .await
        .context("append audit entry")?;
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<AuditEntry>, ComplaintsServiceError> {
        let page = page.clamped();
        let models = audit_logs::Entity::find()
            .order_by_desc(audit_logs::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list audit entries")?;
        Ok(models.into_iter().map(audit_entry_from_model).collect())
    }
}

fn audit_entry_from_model(model: audit_logs::Model) -> AuditEntry {
    AuditEntry {
        id: model.id,
        actor_id: model.actor_id,
        action: model.action,
        details: model.details,
        created_at: model.created_at,
    }
}
