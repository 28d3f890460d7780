use axum::http::StatusCode;

/// Handler for `GET /healthz`, the liveness check. Readiness is
/// service-specific (it depends on backing stores) and lives with each
/// service's handlers.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
