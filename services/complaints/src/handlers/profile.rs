use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hubdesk_auth_types::identity::IdentityHeaders;
use hubdesk_domain::role::Role;

use crate::domain::types::Profile;
use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::profile::{
    EnsureProfileInput, EnsureProfileUseCase, GetProfileUseCase, SetRoleFlagsInput,
    SetRoleFlagsUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub hub: Option<String>,
    pub phone: Option<String>,
    pub is_verified: bool,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hubdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            role: profile.role,
            hub: profile.hub,
            phone: profile.phone,
            is_verified: profile.is_verified,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EnsureProfileRequest {
    pub name: String,
    pub hub: Option<String>,
}

pub async fn ensure_profile(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<EnsureProfileRequest>,
) -> Result<Json<ProfileResponse>, ComplaintsServiceError> {
    let usecase = EnsureProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase
        .execute(
            identity.caller(),
            EnsureProfileInput {
                name: body.name,
                hub: body.hub,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── GET /profiles/@me ────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ComplaintsServiceError> {
    let usecase = GetProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase.execute(identity.user_id).await?;
    Ok(Json(profile.into()))
}

// ── PATCH /profiles/@me ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ComplaintsServiceError> {
    let usecase = UpdateProfileUseCase {
        profiles: state.profile_repo(),
    };
    usecase
        .execute(
            identity.caller(),
            UpdateProfileInput {
                name: body.name,
                phone: body.phone,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /profiles/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetRoleFlagsRequest {
    pub role: Option<String>,
    pub is_verified: Option<bool>,
}

pub async fn set_role_flags(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Json(body): Json<SetRoleFlagsRequest>,
) -> Result<StatusCode, ComplaintsServiceError> {
    let role = body
        .role
        .as_deref()
        .map(|r| Role::from_str(r).ok_or(ComplaintsServiceError::MissingData))
        .transpose()?;
    let usecase = SetRoleFlagsUseCase {
        profiles: state.profile_repo(),
    };
    usecase
        .execute(
            identity.caller(),
            profile_id,
            SetRoleFlagsInput {
                role,
                is_verified: body.is_verified,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
