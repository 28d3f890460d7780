use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Complaints service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ComplaintsServiceError {
    #[error("title must be 5-200 characters")]
    InvalidTitle,
    #[error("description must be 20-2000 characters")]
    InvalidDescription,
    #[error("hub must not be blank")]
    InvalidHub,
    #[error("invalid status value")]
    InvalidStatus,
    #[error("invalid priority value")]
    InvalidPriority,
    #[error("invalid category value")]
    InvalidCategory,
    #[error("message body must not be empty")]
    EmptyMessageBody,
    #[error("file exceeds the 10 MiB limit")]
    FileTooLarge,
    #[error("complaint already has the maximum of 5 attachments")]
    TooManyAttachments,
    #[error("missing data")]
    MissingData,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("complaint not found")]
    ComplaintNotFound,
    #[error("attachment not found")]
    AttachmentNotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("storage error")]
    Storage(#[from] std::io::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ComplaintsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidDescription => "INVALID_DESCRIPTION",
            Self::InvalidHub => "INVALID_HUB",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidPriority => "INVALID_PRIORITY",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::EmptyMessageBody => "EMPTY_MESSAGE_BODY",
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::TooManyAttachments => "TOO_MANY_ATTACHMENTS",
            Self::MissingData => "MISSING_DATA",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::ComplaintNotFound => "COMPLAINT_NOT_FOUND",
            Self::AttachmentNotFound => "ATTACHMENT_NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Storage(_) => "STORAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ComplaintsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidTitle
            | Self::InvalidDescription
            | Self::InvalidHub
            | Self::InvalidStatus
            | Self::InvalidPriority
            | Self::InvalidCategory
            | Self::EmptyMessageBody
            | Self::FileTooLarge
            | Self::TooManyAttachments
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::ProfileNotFound | Self::ComplaintNotFound | Self::AttachmentNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::Storage(e) => tracing::error!(error = %e, kind = "STORAGE", "storage error"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
