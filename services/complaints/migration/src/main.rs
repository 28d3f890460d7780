use sea_orm_migration::prelude::*;

mod m20260801_000001_create_profiles;
mod m20260801_000002_create_complaints;
mod m20260801_000003_create_attachments;
mod m20260801_000004_create_messages;
mod m20260801_000005_create_audit_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_profiles::Migration),
            Box::new(m20260801_000002_create_complaints::Migration),
            Box::new(m20260801_000003_create_attachments::Migration),
            Box::new(m20260801_000004_create_messages::Migration),
            Box::new(m20260801_000005_create_audit_logs::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
