//! Integration tests for the CSV export.

use http::StatusCode;

use crate::helpers::TestApp;

const HEADER_LINE: &str =
    "ID,First Name,Last Name,Email,Mobile,Gender,Status,Location,Profile Image,Created At";

#[tokio::test]
async fn test_export_empty_directory_is_header_only() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/users/export/csv", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").starts_with("text/csv"));
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=users.csv"
    );
    assert_eq!(response.text, format!("{HEADER_LINE}\n"));
}

#[tokio::test]
async fn test_export_lists_newest_first() {
    let app = TestApp::new();
    let older = app.create_user("Older", "older@example.com").await;
    let newer = app.create_user("Newer", "newer@example.com").await;

    let response = app.request("GET", "/api/users/export/csv", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let lines: Vec<&str> = response.text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER_LINE);
    assert!(lines[1].starts_with(newer["id"].as_str().unwrap()));
    assert!(lines[2].starts_with(older["id"].as_str().unwrap()));
    assert!(lines[1].contains(",Newer,Tester,newer@example.com,5551234567,Female,Active,Springfield,,"));
}

#[tokio::test]
async fn test_export_quotes_fields_with_commas() {
    let app = TestApp::new();
    let mut body = crate::helpers::user_json("Quinn", "q@example.com");
    body["location"] = "Portland, OR".into();
    let response = app.request("POST", "/api/users", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/users/export/csv", None).await;

    assert!(response.text.contains(",\"Portland, OR\","));
}

