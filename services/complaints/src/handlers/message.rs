use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hubdesk_auth_types::identity::IdentityHeaders;

use crate::domain::types::{Message, MessageView};
use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::message::{ListMessagesUseCase, PostMessageUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Option<Uuid>,
    pub sender_name: Option<String>,
    pub body: String,
    pub is_internal: bool,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl MessageResponse {
    fn from_message(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            sender_name: None,
            body: message.body,
            is_internal: message.is_internal,
            created_at: message.created_at,
        }
    }

    fn from_view(view: MessageView) -> Self {
        let mut response = Self::from_message(view.message);
        response.sender_name = view.sender_name;
        response
    }
}

// ── POST /complaints/{id}/messages ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostMessageRequest {
    pub body: String,
    #[serde(default)]
    pub is_internal: bool,
}

pub async fn post_message(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
    Json(body): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ComplaintsServiceError> {
    let usecase = PostMessageUseCase {
        complaints: state.complaint_repo(),
        messages: state.message_repo(),
    };
    let message = usecase
        .execute(identity.caller(), complaint_id, body.body, body.is_internal)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::from_message(message)),
    ))
}

// ── GET /complaints/{id}/messages ────────────────────────────────────────────

pub async fn get_messages(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
) -> Result<Json<Vec<MessageResponse>>, ComplaintsServiceError> {
    let usecase = ListMessagesUseCase {
        complaints: state.complaint_repo(),
        messages: state.message_repo(),
        profiles: state.profile_repo(),
    };
    let views = usecase.execute(identity.caller(), complaint_id).await?;
    Ok(Json(
        views.into_iter().map(MessageResponse::from_view).collect(),
    ))
}
