use chrono::Utc;
use uuid::Uuid;

use hubdesk_domain::policy::{self, Caller};

use crate::domain::repository::{ComplaintRepository, MessageRepository, ProfileRepository};
use crate::domain::types::{Message, MessageView};
use crate::error::ComplaintsServiceError;

// ── PostMessage ──────────────────────────────────────────────────────────────

pub struct PostMessageUseCase<C: ComplaintRepository, M: MessageRepository> {
    pub complaints: C,
    pub messages: M,
}

impl<C: ComplaintRepository, M: MessageRepository> PostMessageUseCase<C, M> {
    /// Append a message to a complaint thread. Posting is deliberately open to
    /// any authenticated principal so follow-up on anonymous complaints stays
    /// possible; the sender is always recorded as the caller.
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
        body: String,
        is_internal: bool,
    ) -> Result<Message, ComplaintsServiceError> {
        if body.trim().is_empty() {
            return Err(ComplaintsServiceError::EmptyMessageBody);
        }
        if is_internal && !policy::can_post_internal_note(&caller) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        self.complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;

        let message = Message {
            id: Uuid::now_v7(),
            complaint_id,
            sender_id: Some(caller.id),
            body,
            is_internal,
            created_at: Utc::now(),
        };
        self.messages.create(&message).await?;
        Ok(message)
    }
}

// ── ListMessages ─────────────────────────────────────────────────────────────

pub struct ListMessagesUseCase<C: ComplaintRepository, M: MessageRepository, P: ProfileRepository>
{
    pub complaints: C,
    pub messages: M,
    pub profiles: P,
}

impl<C: ComplaintRepository, M: MessageRepository, P: ProfileRepository>
    ListMessagesUseCase<C, M, P>
{
    pub async fn execute(
        &self,
        caller: Caller,
        complaint_id: Uuid,
    ) -> Result<Vec<MessageView>, ComplaintsServiceError> {
        let parent = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        if !policy::can_read_sub_resource(&caller, parent.user_id) {
            return Err(ComplaintsServiceError::ComplaintNotFound);
        }

        let include_internal = caller.role.is_elevated();
        let rows = self
            .messages
            .list_by_complaint(complaint_id, include_internal)
            .await?;

        let mut sender_ids: Vec<Uuid> = rows.iter().filter_map(|m| m.sender_id).collect();
        sender_ids.sort_unstable();
        sender_ids.dedup();
        let names = self.profiles.find_names(&sender_ids).await?;

        Ok(rows
            .into_iter()
            .map(|message| MessageView {
                sender_name: message.sender_id.and_then(|id| {
                    names
                        .iter()
                        .find(|(nid, _)| *nid == id)
                        .map(|(_, name)| name.clone())
                }),
                message,
            })
            .collect())
    }
}
