use chrono::{DateTime, Utc};
use uuid::Uuid;

use hubdesk_domain::complaint::{MAX_ATTACHMENTS_PER_COMPLAINT, MAX_ATTACHMENT_BYTES};
use hubdesk_domain::policy::{self, Caller};

use crate::domain::repository::{AttachmentRepository, BlobStore, ComplaintRepository};
use crate::domain::types::Attachment;
use crate::error::ComplaintsServiceError;

/// Blob keys are namespaced by complaint id so the parent's visibility check
/// covers every object under the prefix.
fn blob_key(complaint_id: Uuid, file_name: &str, at: DateTime<Utc>) -> String {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    format!("{complaint_id}/{}.{ext}", at.timestamp_millis())
}

// ── UploadAttachment ─────────────────────────────────────────────────────────

pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

pub struct UploadAttachmentUseCase<C: ComplaintRepository, A: AttachmentRepository, B: BlobStore>
{
    pub complaints: C,
    pub attachments: A,
    pub blobs: B,
}

impl<C: ComplaintRepository, A: AttachmentRepository, B: BlobStore>
    UploadAttachmentUseCase<C, A, B>
{
    /// Store the blob first, then the metadata row. Like posting a message,
    /// uploading is open to any authenticated principal so attachments can be
    /// added to anonymous complaints at submission time.
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
        upload: FileUpload,
    ) -> Result<Attachment, ComplaintsServiceError> {
        self.complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;

        // 10 MiB exactly is accepted.
        if upload.data.len() as u64 > MAX_ATTACHMENT_BYTES {
            return Err(ComplaintsServiceError::FileTooLarge);
        }
        if self.attachments.count_by_complaint(complaint_id).await?
            >= MAX_ATTACHMENTS_PER_COMPLAINT
        {
            return Err(ComplaintsServiceError::TooManyAttachments);
        }

        let now = Utc::now();
        let key = blob_key(complaint_id, &upload.file_name, now);
        self.blobs.put(&key, &upload.data).await?;

        let attachment = Attachment {
            id: Uuid::now_v7(),
            complaint_id,
            uploader_id: Some(caller.id),
            file_path: key,
            file_name: upload.file_name,
            mime_type: upload.mime_type,
            file_size: upload.data.len() as i64,
            created_at: now,
        };
        self.attachments.create(&attachment).await?;
        Ok(attachment)
    }
}

// ── ListAttachments ──────────────────────────────────────────────────────────

pub struct ListAttachmentsUseCase<C: ComplaintRepository, A: AttachmentRepository> {
    pub complaints: C,
    pub attachments: A,
}

impl<C: ComplaintRepository, A: AttachmentRepository> ListAttachmentsUseCase<C, A> {
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
    ) -> Result<Vec<Attachment>, ComplaintsServiceError> {
        let parent = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        if !policy::can_read_sub_resource(&caller, parent.user_id) {
            return Err(ComplaintsServiceError::ComplaintNotFound);
        }
        self.attachments.list_by_complaint(complaint_id).await
    }
}

// ── DownloadAttachment ───────────────────────────────────────────────────────

pub struct DownloadAttachmentUseCase<C: ComplaintRepository, A: AttachmentRepository, B: BlobStore>
{
    pub complaints: C,
    pub attachments: A,
    pub blobs: B,
}

impl<C: ComplaintRepository, A: AttachmentRepository, B: BlobStore>
    DownloadAttachmentUseCase<C, A, B>
{
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
        attachment_id: Uuid,
    ) -> Result<(Attachment, Vec<u8>), ComplaintsServiceError> {
        let parent = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        if !policy::can_read_sub_resource(&caller, parent.user_id) {
            return Err(ComplaintsServiceError::ComplaintNotFound);
        }
        let attachment = self
            .attachments
            .find_by_id(attachment_id)
            .await?
            .filter(|a| a.complaint_id == complaint_id)
            .ok_or(ComplaintsServiceError::AttachmentNotFound)?;
        let data = self.blobs.get(&attachment.file_path).await?;
        Ok((attachment, data))
    }
}
