use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use hubdesk_core::health::healthz;
use hubdesk_core::middleware::request_id_layer;

use crate::handlers::{
    attachment::{download_attachment, get_attachments, upload_attachment},
    audit::get_audit_logs,
    complaint::{
        assign_complaint, create_complaint, get_complaint, get_complaints, update_status,
    },
    health::readyz,
    message::{get_messages, post_message},
    profile::{ensure_profile, get_me, set_role_flags, update_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Profiles
        .route("/profiles", post(ensure_profile))
        .route("/profiles/@me", get(get_me))
        .route("/profiles/@me", patch(update_me))
        .route("/profiles/{id}", patch(set_role_flags))
        // Complaints
        .route("/complaints", post(create_complaint))
        .route("/complaints", get(get_complaints))
        .route("/complaints/{id}", get(get_complaint))
        .route("/complaints/{id}/status", patch(update_status))
        .route("/complaints/{id}/assignee", patch(assign_complaint))
        // Messages
        .route("/complaints/{id}/messages", post(post_message))
        .route("/complaints/{id}/messages", get(get_messages))
        // Attachments
        .route("/complaints/{id}/attachments", post(upload_attachment))
        .route("/complaints/{id}/attachments", get(get_attachments))
        .route(
            "/complaints/{id}/attachments/{attachment_id}",
            get(download_attachment),
        )
        // Audit
        .route("/audit-logs", get(get_audit_logs))
        // A 10 MiB attachment plus multipart framing exceeds axum's 2 MB
        // default body limit.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
