use chrono::Utc;
use uuid::Uuid;

use hubdesk_domain::policy::{self, Caller};
use hubdesk_domain::role::Role;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::Profile;
use crate::error::ComplaintsServiceError;

// ── EnsureProfile ────────────────────────────────────────────────────────────

pub struct EnsureProfileInput {
    pub name: String,
    pub hub: Option<String>,
}

/// Explicit onboarding step invoked after identity verification. Idempotent:
/// the first call creates the profile with the default student role, repeated
/// calls return the existing row untouched.
pub struct EnsureProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> EnsureProfileUseCase<P> {
    pub async fn execute(
        &self,
        caller: Caller,
        input: EnsureProfileInput,
    ) -> Result<Profile, ComplaintsServiceError> {
        if let Some(existing) = self.profiles.find_by_id(caller.id).await? {
            return Ok(existing);
        }
        if input.name.trim().is_empty() {
            return Err(ComplaintsServiceError::MissingData);
        }
        let now = Utc::now();
        let profile = Profile {
            id: caller.id,
            name: input.name,
            role: Role::Student,
            hub: input.hub,
            phone: None,
            is_verified: false,
            created_at: now,
            updated_at: now,
        };
        self.profiles.create(&profile).await?;
        Ok(profile)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetProfileUseCase<P> {
    pub async fn execute(&self, profile_id: Uuid) -> Result<Profile, ComplaintsServiceError> {
        self.profiles
            .find_by_id(profile_id)
            .await?
            .ok_or(ComplaintsServiceError::ProfileNotFound)
    }
}

// ── UpdateProfile (self) ─────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub struct UpdateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateProfileUseCase<P> {
    pub async fn execute(
        &self,
        caller: Caller,
        input: UpdateProfileInput,
    ) -> Result<(), ComplaintsServiceError> {
        if input.name.is_none() && input.phone.is_none() {
            return Err(ComplaintsServiceError::MissingData);
        }
        self.profiles
            .find_by_id(caller.id)
            .await?
            .ok_or(ComplaintsServiceError::ProfileNotFound)?;
        self.profiles
            .update_contact(caller.id, input.name.as_deref(), input.phone.as_deref())
            .await
    }
}

// ── SetRoleFlags (admin) ─────────────────────────────────────────────────────

pub struct SetRoleFlagsInput {
    pub role: Option<Role>,
    pub is_verified: Option<bool>,
}

pub struct SetRoleFlagsUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> SetRoleFlagsUseCase<P> {
    pub async fn execute(
        &self,
        caller: Caller,
        profile_id: Uuid,
        input: SetRoleFlagsInput,
    ) -> Result<(), ComplaintsServiceError> {
        if !policy::can_manage_profiles(&caller) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        if input.role.is_none() && input.is_verified.is_none() {
            return Err(ComplaintsServiceError::MissingData);
        }
        self.profiles
            .find_by_id(profile_id)
            .await?
            .ok_or(ComplaintsServiceError::ProfileNotFound)?;
        self.profiles
            .update_role_flags(profile_id, input.role, input.is_verified)
            .await
    }
}
