//! sea-orm entities for the complaints service.

pub mod attachments;
pub mod audit_logs;
pub mod complaints;
pub mod messages;
pub mod profiles;
