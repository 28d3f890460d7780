use sea_orm::Database;
use tracing::info;

use hubdesk_complaints::config::ComplaintsConfig;
use hubdesk_complaints::infra::storage;
use hubdesk_complaints::router::build_router;
use hubdesk_complaints::state::AppState;

#[tokio::main]
async fn main() {
    hubdesk_core::tracing::init_tracing();

    let config = ComplaintsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    storage::ensure_root(&config.attachments_dir)
        .await
        .expect("failed to create attachments directory");

    let state = AppState {
        db,
        attachments_dir: config.attachments_dir,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.complaints_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("complaints service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
