use hubdesk_domain::pagination::PageRequest;
use hubdesk_domain::policy::{self, Caller};

use crate::domain::repository::AuditLogRepository;
use crate::domain::types::AuditEntry;
use crate::error::ComplaintsServiceError;

pub struct ListAuditLogUseCase<A: AuditLogRepository> {
    pub audit: A,
}

impl<A: AuditLogRepository> ListAuditLogUseCase<A> {
    pub async fn execute(
        &self,
        caller: Caller,
        page: PageRequest,
    ) -> Result<Vec<AuditEntry>, ComplaintsServiceError> {
        if !policy::can_read_audit_log(&caller) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        self.audit.list(page.clamped()).await
    }
}
