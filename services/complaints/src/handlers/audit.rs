use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hubdesk_auth_types::identity::IdentityHeaders;
use hubdesk_domain::pagination::PageRequest;

use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::audit::ListAuditLogUseCase;

#[derive(Serialize)]
pub struct AuditEntryResponse {
    pub id: Uuid,
    pub actor_id: Option<Uuid>,
    pub action: String,
    pub details: serde_json::Value,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AuditListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

// ── GET /audit-logs ──────────────────────────────────────────────────────────

pub async fn get_audit_logs(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<AuditEntryResponse>>, ComplaintsServiceError> {
    let query: AuditListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ComplaintsServiceError::MissingData)?
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListAuditLogUseCase {
        audit: state.audit_repo(),
    };
    let entries = usecase.execute(identity.caller(), page).await?;
    Ok(Json(
        entries
            .into_iter()
            .map(|entry| AuditEntryResponse {
                id: entry.id,
                actor_id: entry.actor_id,
                action: entry.action,
                details: entry.details,
                created_at: entry.created_at,
            })
            .collect(),
    ))
}
