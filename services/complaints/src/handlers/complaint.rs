use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hubdesk_auth_types::identity::IdentityHeaders;
use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::PageRequest;

use crate::domain::types::{Complaint, ComplaintFilter, ComplaintSortBy, ComplaintView};
use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::complaint::{
    AssignComplaintUseCase, ComplaintDraft, CreateComplaintUseCase, GetComplaintUseCase,
    ListComplaintsUseCase, UpdateStatusUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
    pub submitter_name: Option<String>,
    pub manager_name: Option<String>,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub hub: String,
    pub room: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub is_anonymous: bool,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms_opt")]
    pub sla_due_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ComplaintResponse {
    fn from_complaint(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            user_id: complaint.user_id,
            manager_id: complaint.manager_id,
            submitter_name: None,
            manager_name: None,
            title: complaint.title,
            description: complaint.description,
            category: complaint.category,
            hub: complaint.hub,
            room: complaint.room,
            priority: complaint.priority,
            status: complaint.status,
            is_anonymous: complaint.is_anonymous,
            sla_due_at: complaint.sla_due_at,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }

    fn from_view(view: ComplaintView) -> Self {
        let mut response = Self::from_complaint(view.complaint);
        response.submitter_name = view.submitter_name;
        response.manager_name = view.manager_name;
        response
    }
}

// ── POST /complaints ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateComplaintRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub hub: String,
    pub room: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    pub sla_due_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn create_complaint(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateComplaintRequest>,
) -> Result<(StatusCode, Json<ComplaintResponse>), ComplaintsServiceError> {
    let category =
        Category::from_str(&body.category).ok_or(ComplaintsServiceError::InvalidCategory)?;
    let priority = match body.priority.as_deref() {
        Some(p) => Priority::from_str(p).ok_or(ComplaintsServiceError::InvalidPriority)?,
        None => Priority::Medium,
    };

    let usecase = CreateComplaintUseCase {
        complaints: state.complaint_repo(),
    };
    let complaint = usecase
        .execute(
            identity.caller(),
            ComplaintDraft {
                title: body.title,
                description: body.description,
                category,
                hub: body.hub,
                room: body.room,
                priority,
                is_anonymous: body.is_anonymous,
                sla_due_at: body.sla_due_at,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ComplaintResponse::from_complaint(complaint)),
    ))
}

// ── GET /complaints ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ComplaintListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub hub: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

pub async fn get_complaints(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ComplaintResponse>>, ComplaintsServiceError> {
    let query: ComplaintListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ComplaintsServiceError::MissingData)?
        .unwrap_or_default();

    let status = query
        .status
        .as_deref()
        .map(|s| Status::from_str(s).ok_or(ComplaintsServiceError::InvalidStatus))
        .transpose()?;
    let priority = query
        .priority
        .as_deref()
        .map(|p| Priority::from_str(p).ok_or(ComplaintsServiceError::InvalidPriority))
        .transpose()?;
    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(ComplaintSortBy::from_kebab_case)
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListComplaintsUseCase {
        complaints: state.complaint_repo(),
        profiles: state.profile_repo(),
    };
    let views = usecase
        .execute(
            identity.caller(),
            ComplaintFilter {
                status,
                priority,
                hub: query.hub,
                search: query.search,
            },
            sort_by,
            page,
        )
        .await?;
    Ok(Json(
        views.into_iter().map(ComplaintResponse::from_view).collect(),
    ))
}

// ── GET /complaints/{id} ─────────────────────────────────────────────────────

pub async fn get_complaint(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
) -> Result<Json<ComplaintResponse>, ComplaintsServiceError> {
    let usecase = GetComplaintUseCase {
        complaints: state.complaint_repo(),
        profiles: state.profile_repo(),
    };
    let view = usecase.execute(identity.caller(), complaint_id).await?;
    Ok(Json(ComplaintResponse::from_view(view)))
}

// ── PATCH /complaints/{id}/status ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_status(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ComplaintResponse>, ComplaintsServiceError> {
    let status = Status::from_str(&body.status).ok_or(ComplaintsServiceError::InvalidStatus)?;
    let usecase = UpdateStatusUseCase {
        complaints: state.complaint_repo(),
        audit: state.audit_repo(),
    };
    let complaint = usecase
        .execute(identity.caller(), complaint_id, status)
        .await?;
    Ok(Json(ComplaintResponse::from_complaint(complaint)))
}

// ── PATCH /complaints/{id}/assignee ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct AssignComplaintRequest {
    pub manager_id: Option<Uuid>,
}

pub async fn assign_complaint(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(complaint_id): Path<Uuid>,
    Json(body): Json<AssignComplaintRequest>,
) -> Result<Json<ComplaintResponse>, ComplaintsServiceError> {
    let usecase = AssignComplaintUseCase {
        complaints: state.complaint_repo(),
        audit: state.audit_repo(),
    };
    let complaint = usecase
        .execute(identity.caller(), complaint_id, body.manager_id)
        .await?;
    Ok(Json(ComplaintResponse::from_complaint(complaint)))
}
