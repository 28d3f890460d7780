use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
};
use serde::Serialize;
use uuid::Uuid;

use hubdesk_auth_types::identity::IdentityHeaders;

use crate::domain::types::Attachment;
use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::attachment::{
    DownloadAttachmentUseCase, FileUpload, ListAttachmentsUseCase, UploadAttachmentUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AttachmentResponse {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub uploader_id: Option<Uuid>,
    pub file_name: String,
    pub mime_type: String,
    pub file_size: i64,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            complaint_id: attachment.complaint_id,
            uploader_id: attachment.uploader_id,
            file_name: attachment.file_name,
            mime_type: attachment.mime_type,
            file_size: attachment.file_size,
            created_at: attachment.created_at,
        }
    }
}

// ── POST /complaints/{id}/attachments ────────────────────────────────────────

pub async fn upload_attachment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AttachmentResponse>), ComplaintsServiceError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ComplaintsServiceError::MissingData)?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.bin").to_owned();
        let mime_type = match field.content_type() {
            Some(mime) => mime.to_owned(),
            None => mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .to_string(),
        };
        // The body limit is set above the attachment cap, so an overrun here
        // means the file was too large rather than a framing problem.
        let data = field
            .bytes()
            .await
            .map_err(|_| ComplaintsServiceError::FileTooLarge)?
            .to_vec();
        upload = Some(FileUpload {
            file_name,
            mime_type,
            data,
        });
    }
    let upload = upload.ok_or(ComplaintsServiceError::MissingData)?;

    let usecase = UploadAttachmentUseCase {
        complaints: state.complaint_repo(),
        attachments: state.attachment_repo(),
        blobs: state.blob_store(),
    };
    let attachment = usecase
        .execute(identity.caller(), complaint_id, upload)
        .await?;
    Ok((StatusCode::CREATED, Json(attachment.into())))
}

// ── GET /complaints/{id}/attachments ─────────────────────────────────────────

pub async fn get_attachments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
) -> Result<Json<Vec<AttachmentResponse>>, ComplaintsServiceError> {
    let usecase = ListAttachmentsUseCase {
        complaints: state.complaint_repo(),
        attachments: state.attachment_repo(),
    };
    let attachments = usecase.execute(identity.caller(), complaint_id).await?;
    Ok(Json(
        attachments.into_iter().map(AttachmentResponse::from).collect(),
    ))
}

// ── GET /complaints/{id}/attachments/{attachment_id} ─────────────────────────

pub async fn download_attachment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((complaint_id, attachment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl axum::response::IntoResponse, ComplaintsServiceError> {
    let usecase = DownloadAttachmentUseCase {
        complaints: state.complaint_repo(),
        attachments: state.attachment_repo(),
        blobs: state.blob_store(),
    };
    let (attachment, data) = usecase
        .execute(identity.caller(), complaint_id, attachment_id)
        .await?;
    let headers = [
        (header::CONTENT_TYPE, attachment.mime_type),
        (
            header::CONTENT_DISPOSITION,
            content_disposition(&attachment.file_name),
        ),
    ];
    Ok((headers, data))
}

/// Build a `Content-Disposition` value from a stored filename. Quotes,
/// backslashes and non-ASCII bytes would make the header value invalid, so
/// they are replaced before quoting.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    if safe.chars().all(|c| c == '_' || c == ' ') {
        return "attachment; filename=\"download.bin\"".to_owned();
    }
    format!("attachment; filename=\"{safe}\"")
}
