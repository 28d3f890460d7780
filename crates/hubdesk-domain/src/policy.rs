//! Authorization policy predicates.
//!
//! Every predicate the storage layer used to evaluate per row lives here as a
//! pure function over `(caller id, caller role, resource ownership fields)`.
//! Usecases call these before touching any repository; nothing below this
//! module knows about HTTP or the database.

use uuid::Uuid;

use crate::role::Role;

/// The authenticated principal a policy decision is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

/// A complaint row is visible to its submitter and to any manager/admin.
/// Anonymous complaints have no submitter, so only elevated roles see them.
pub fn can_read_complaint(caller: &Caller, submitter_id: Option<Uuid>) -> bool {
    caller.role.is_elevated() || submitter_id == Some(caller.id)
}

/// Status and assignment writes are reserved for managers and admins.
pub fn can_write_complaint(caller: &Caller) -> bool {
    caller.role.is_elevated()
}

/// A complaint may be created on one's own behalf, or anonymously (in which
/// case no submitter is recorded at all).
pub fn can_create_complaint(caller: &Caller, submitter_id: Option<Uuid>, is_anonymous: bool) -> bool {
    is_anonymous || submitter_id == Some(caller.id)
}

/// Messages and attachments inherit the parent complaint's read predicate.
pub fn can_read_sub_resource(caller: &Caller, parent_submitter_id: Option<Uuid>) -> bool {
    can_read_complaint(caller, parent_submitter_id)
}

/// Internal notes are writable by managers and admins only.
pub fn can_post_internal_note(caller: &Caller) -> bool {
    caller.role.is_elevated()
}

/// The audit log is readable by admins only.
pub fn can_read_audit_log(caller: &Caller) -> bool {
    caller.role == Role::Admin
}

/// Role and verification edits on other profiles are admin-only.
pub fn can_manage_profiles(caller: &Caller) -> bool {
    caller.role == Role::Admin
}
