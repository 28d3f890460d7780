use axum::http::StatusCode;
use axum_test::TestServer;
use uuid::Uuid;

use hubdesk_complaints::router::build_router;
use hubdesk_complaints::state::AppState;

fn test_server() -> TestServer {
    let state = AppState {
        db: sea_orm::DatabaseConnection::Disconnected,
        attachments_dir: std::env::temp_dir(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn healthz_answers_without_identity() {
    let server = test_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn readyz_reports_unavailable_when_database_is_down() {
    let server = test_server();
    assert_eq!(
        server.get("/readyz").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn requests_without_identity_headers_are_unauthorized() {
    let server = test_server();
    let response = server.get("/complaints").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn requests_with_malformed_identity_are_unauthorized() {
    let server = test_server();
    let response = server
        .get("/complaints")
        .add_header("x-hubdesk-user-id", "not-a-uuid")
        .add_header("x-hubdesk-user-role", "student")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .get("/complaints")
        .add_header("x-hubdesk-user-id", Uuid::now_v7().to_string())
        .add_header("x-hubdesk-user-role", "janitor")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
