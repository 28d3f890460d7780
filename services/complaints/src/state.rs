use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAttachmentRepository, DbAuditLogRepository, DbComplaintRepository, DbMessageRepository,
    DbProfileRepository,
};
use crate::infra::storage::LocalBlobStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub attachments_dir: PathBuf,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn complaint_repo(&self) -> DbComplaintRepository {
        DbComplaintRepository {
            db: self.db.clone(),
        }
    }

    pub fn message_repo(&self) -> DbMessageRepository {
        DbMessageRepository {
            db: self.db.clone(),
        }
    }

    pub fn attachment_repo(&self) -> DbAttachmentRepository {
        DbAttachmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn audit_repo(&self) -> DbAuditLogRepository {
        DbAuditLogRepository {
            db: self.db.clone(),
        }
    }

    pub fn blob_store(&self) -> LocalBlobStore {
        LocalBlobStore::new(self.attachments_dir.clone())
    }
}
