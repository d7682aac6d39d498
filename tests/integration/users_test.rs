//! Integration tests for user CRUD over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, test_config, user_form, user_json};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

#[tokio::test]
async fn test_create_json_returns_created_record() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/users", Some(user_json("Ann", "ann@example.com")))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "User created successfully");
    let data = &response.body["data"];
    assert_eq!(data["firstName"], "Ann");
    assert_eq!(data["gender"], "Female");
    assert_eq!(data["status"], "Active");
    assert_eq!(data["profileImage"], "");
    assert!(data["id"].as_str().is_some());
    assert_eq!(data["createdAt"], data["updatedAt"]);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_create_multipart_with_image_uploads_it() {
    let app = TestApp::new();

    let response = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Bob", "bob@example.com"),
            Some(("bob.png", "image/png", PNG)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    let url = response.body["data"]["profileImage"].as_str().unwrap();
    assert!(url.starts_with("memory://"));
    assert!(app.media.contains(url).await);
    assert_eq!(response.body["data"]["gender"], "Male");
    assert_eq!(response.body["data"]["status"], "Active");
}

#[tokio::test]
async fn test_create_multipart_skips_empty_image_part() {
    let app = TestApp::new();

    let response = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Cy", "cy@example.com"),
            Some(("", "application/octet-stream", b"")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    assert_eq!(response.body["data"]["profileImage"], "");
    assert!(app.media.is_empty().await);
}

#[tokio::test]
async fn test_create_urlencoded_form() {
    let app = TestApp::new();

    let response = app
        .urlencoded(
            "POST",
            "/api/users",
            "firstName=Rae&lastName=Tester&email=rae%40example.com&mobile=5551234567\
             &gender=Other&status=Inactive&location=Ogden%2C+UT",
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    let data = &response.body["data"];
    assert_eq!(data["email"], "rae@example.com");
    assert_eq!(data["status"], "Inactive");
    assert_eq!(data["location"], "Ogden, UT");
}

#[tokio::test]
async fn test_create_missing_fields_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "firstName": "Dee", "gender": "Other" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("Last name is required"));
    assert!(message.contains("Location is required"));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_invalid_gender_is_rejected() {
    let app = TestApp::new();
    let mut body = user_json("Eve", "eve@example.com");
    body["gender"] = "unknown".into();

    let response = app.request("POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_with_unsupported_image_type_is_rejected() {
    let app = TestApp::new();

    let response = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Fay", "fay@example.com"),
            Some(("notes.txt", "text/plain", b"hello")),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.media.is_empty().await);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_upload_failure_writes_nothing() {
    let app = TestApp::new();
    app.media.set_fail_uploads(true);

    let response = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Gus", "gus@example.com"),
            Some(("gus.png", "image/png", PNG)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "MEDIA_STORE_ERROR");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_list_paginates_newest_first() {
    let app = TestApp::new();
    for i in 0..5 {
        app.create_user(&format!("User{i}"), &format!("u{i}@example.com"))
            .await;
    }

    let response = app.request("GET", "/api/users?page=2&limit=2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().unwrap();
    let names: Vec<&str> = data
        .iter()
        .map(|u| u["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["User2", "User1"]);

    let pagination = &response.body["pagination"];
    assert_eq!(pagination["currentPage"], 2);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(pagination["totalUsers"], 5);
    assert_eq!(pagination["limit"], 2);
}

#[tokio::test]
async fn test_list_defaults_and_bad_query_values_fall_back() {
    let app = TestApp::new();
    app.create_user("Only", "only@example.com").await;

    let response = app
        .request("GET", "/api/users?page=-3&limit=abc", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let pagination = &response.body["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["limit"], 10);
    assert_eq!(pagination["totalPages"], 1);
}

#[tokio::test]
async fn test_list_page_past_end_is_empty() {
    let app = TestApp::new();
    app.create_user("Only", "only@example.com").await;

    let response = app.request("GET", "/api/users?page=9", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 0);
    assert_eq!(response.body["pagination"]["totalUsers"], 1);
}

#[tokio::test]
async fn test_list_search_is_case_insensitive() {
    let app = TestApp::new();
    app.create_user("Alice", "alice@example.com").await;
    app.create_user("Bob", "bob@other.org").await;
    app.create_user("Malice", "m@example.com").await;

    let response = app.request("GET", "/api/users?search=ALIC", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["totalUsers"], 2);

    let response = app
        .request("GET", "/api/users?search=other.org", None)
        .await;
    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["firstName"], "Bob");
}

#[tokio::test]
async fn test_list_search_treats_wildcards_literally() {
    let app = TestApp::new();
    app.create_user("Percy", "percy@example.com").await;

    let response = app.request("GET", "/api/users?search=%25", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["totalUsers"], 0);
}

#[tokio::test]
async fn test_get_user() {
    let app = TestApp::new();
    let created = app.create_user("Hal", "hal@example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = app.request("GET", &format!("/api/users/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], created);
}

#[tokio::test]
async fn test_get_unknown_or_malformed_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/users/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");

    let response = app.request("GET", "/api/users/not-an-id", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_without_image_keeps_it() {
    let app = TestApp::new();
    let created = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Ivy", "ivy@example.com"),
            Some(("ivy.png", "image/png", PNG)),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let image = created.body["data"]["profileImage"].clone();

    let mut body = user_json("Ivy", "ivy@new.example.com");
    body["status"] = "Inactive".into();
    let response = app
        .request("PUT", &format!("/api/users/{id}"), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User updated successfully");
    let data = &response.body["data"];
    assert_eq!(data["email"], "ivy@new.example.com");
    assert_eq!(data["status"], "Inactive");
    assert_eq!(data["profileImage"], image);
    assert_eq!(data["createdAt"], created.body["data"]["createdAt"]);
    assert!(response.body.get("warnings").is_none());
}

#[tokio::test]
async fn test_update_with_image_replaces_it() {
    let app = TestApp::new();
    let created = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Jo", "jo@example.com"),
            Some(("old.png", "image/png", PNG)),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let old_url = created.body["data"]["profileImage"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .multipart(
            "PUT",
            &format!("/api/users/{id}"),
            &user_form("Jo", "jo@example.com"),
            Some(("new.jpg", "image/jpeg", b"jpeg-bytes")),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    let new_url = response.body["data"]["profileImage"].as_str().unwrap();
    assert_ne!(new_url, old_url);
    assert!(app.media.contains(new_url).await);
    assert!(!app.media.contains(&old_url).await);
    assert_eq!(app.media.len().await, 1);
}

#[tokio::test]
async fn test_update_reports_failed_image_cleanup_as_warning() {
    let app = TestApp::new();
    let created = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Kim", "kim@example.com"),
            Some(("kim.png", "image/png", PNG)),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    app.media.set_fail_deletes(true);

    let response = app
        .multipart(
            "PUT",
            &format!("/api/users/{id}"),
            &user_form("Kim", "kim@example.com"),
            Some(("kim2.png", "image/png", PNG)),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", uuid::Uuid::new_v4()),
            Some(user_json("Lou", "lou@example.com")),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_id_with_blank_body_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", uuid::Uuid::new_v4()),
            Some(json!({})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn test_update_invalid_body_leaves_record_untouched() {
    let app = TestApp::new();
    let created = app.create_user("Max", "max@example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "firstName": "Max", "gender": "Male" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(response.body["data"], created);
}

#[tokio::test]
async fn test_delete_removes_record_and_image() {
    let app = TestApp::new();
    let created = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Ned", "ned@example.com"),
            Some(("ned.png", "image/png", PNG)),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User deleted successfully");
    assert!(app.media.is_empty().await);
    assert!(app.store.is_empty().await);

    let response = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_succeeds_with_warning_when_image_cleanup_fails() {
    let app = TestApp::new();
    let created = app
        .multipart(
            "POST",
            "/api/users",
            &user_form("Oda", "oda@example.com"),
            Some(("oda.png", "image/png", PNG)),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    app.media.set_fail_deletes(true);

    let response = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let warnings = response.body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::new();
    app.store.set_fail_writes(true);

    let response = app
        .request("POST", "/api/users", Some(user_json("Pam", "pam@example.com")))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_strict_validation_rejects_bad_formats() {
    let mut config = test_config();
    config.users.strict_validation = true;
    let app = TestApp::with_config(config);

    let mut body = user_json("Q", "not-an-email");
    body["mobile"] = "12".into();
    let response = app.request("POST", "/api/users", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("Email is invalid"));
    assert!(message.contains("Mobile must be 10 digits"));
}
