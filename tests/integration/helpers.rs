//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use docflow_api::AppState;
use docflow_core::config::AppConfig;
use docflow_database::MemoryRecordStore;
use docflow_storage::FileStore;

const BOUNDARY: &str = "docflow-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Upload directory, removed on drop
    pub upload_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an in-memory store and a temp upload dir
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.storage.upload_dir = upload_dir.path().to_string_lossy().into_owned();

        let store = Arc::new(MemoryRecordStore::new());
        let files = FileStore::from_config(&config.storage)
            .await
            .expect("Failed to init file store");

        let state = AppState::new(config, store, files).expect("Failed to build app state");
        let router = docflow_api::build_router(state);

        Self { router, upload_dir }
    }

    /// Register a user and return the access token
    pub async fn register(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Register failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Login and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Create a category and return its ID
    pub async fn create_category(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        id_of(&response)
    }

    /// Upload a document and return the response
    pub async fn upload(
        &self,
        token: &str,
        file_name: &str,
        content: &[u8],
        fields: &[(&str, &str)],
    ) -> TestResponse {
        let body = multipart_body(Some((file_name, "text/plain", content)), fields);
        self.send(multipart_request(body, Some(token))).await
    }

    /// Upload a document and return its ID
    pub async fn upload_ok(
        &self,
        token: &str,
        title: &str,
        file_name: &str,
        content: &[u8],
    ) -> String {
        let response = self
            .upload(token, file_name, content, &[("title", title)])
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        id_of(&response)
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            raw: bytes.to_vec(),
            body,
        }
    }

    /// Number of files currently in the upload directory
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to read upload dir")
            .count()
    }
}

/// Build a `multipart/form-data` body with an optional file part and text fields
pub fn multipart_body(file: Option<(&str, &str, &[u8])>, fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((file_name, content_type, content)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Wrap a multipart body in a `POST /api/documents` request
pub fn multipart_request(body: Vec<u8>, token: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri("/api/documents")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );

    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    req.body(Body::from(body)).expect("Failed to build request")
}

fn token_of(response: &TestResponse) -> String {
    response
        .body
        .get("access_token")
        .and_then(|v| v.as_str())
        .expect("No access_token in response")
        .to_string()
}

fn id_of(response: &TestResponse) -> String {
    response
        .body
        .get("id")
        .and_then(|v| v.as_str())
        .expect("No id in response")
        .to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Raw body bytes
    pub raw: Vec<u8>,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
}
