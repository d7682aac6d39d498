//! Integration tests for the root and health endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_root_reports_running() {
    let app = TestApp::new();

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "User Management API is running");
}

#[tokio::test]
async fn test_health_reports_collaborators() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["status"], "ok");
    assert_eq!(data["store"], "memory");
    assert_eq!(data["storeHealthy"], true);
    assert_eq!(data["media"], "memory");
    assert_eq!(data["mediaHealthy"], true);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nothing-here", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
