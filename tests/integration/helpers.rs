//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use directory_api::{build_app, build_state};
use directory_core::config::AppConfig;
use directory_database::MemoryUserStore;
use directory_storage::providers::MemoryMediaStore;

const BOUNDARY: &str = "directory-test-boundary";

/// Test application backed by in-memory stores
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Record store, for inspection and failure injection
    pub store: Arc<MemoryUserStore>,
    /// Media store, for inspection and failure injection
    pub media: Arc<MemoryMediaStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an adjusted configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let media = Arc::new(MemoryMediaStore::new());
        let state = build_state(config, store.clone(), media.clone());

        Self {
            router: build_app(state),
            store,
            media,
        }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a multipart form with text fields and an optional image part
    pub async fn multipart(
        &self,
        method: &str,
        path: &str,
        fields: &[(&str, &str)],
        image: Option<(&str, &str, &[u8])>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, image)))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send an `application/x-www-form-urlencoded` body
    pub async fn urlencoded(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Create a user through the API and return its JSON representation
    pub async fn create_user(&self, first_name: &str, email: &str) -> Value {
        let response = self
            .request("POST", "/api/users", Some(user_json(first_name, email)))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.body["data"].clone()
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// Value of a response header as a string
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Configuration with memory stores selected
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = "memory".to_string();
    config.media.provider = "memory".to_string();
    config
}

/// A complete JSON create/update body
pub fn user_json(first_name: &str, email: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Tester",
        "email": email,
        "mobile": "5551234567",
        "gender": "Female",
        "status": "Active",
        "location": "Springfield",
    })
}

/// Complete text fields for a multipart create/update
pub fn user_form<'a>(first_name: &'a str, email: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("firstName", first_name),
        ("lastName", "Tester"),
        ("email", email),
        ("mobile", "5551234567"),
        ("gender", "Male"),
        ("location", "Shelbyville"),
    ]
}

fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"profileImage\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
