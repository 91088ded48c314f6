//! Integration tests for the category registry.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_and_list_categories() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "Invoices" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Invoices");
    assert!(response.body["user_id"].as_str().is_some());

    app.create_category(&token, "Contracts").await;

    let list = app
        .request("GET", "/api/categories", None, Some(&token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let names: Vec<&str> = list
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Invoices", "Contracts"]);
}

#[tokio::test]
async fn test_categories_are_private() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice", "alice@example.com", "s3cret").await;
    let bob = app.register("bob", "bob@example.com", "s3cret").await;

    let id = app.create_category(&alice, "Invoices").await;

    let list = app.request("GET", "/api/categories", None, Some(&bob)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.as_array().unwrap().is_empty());

    let delete = app
        .request("DELETE", &format!("/api/categories/{id}"), None, Some(&bob))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.body["message"], "Category not found");

    let list = app
        .request("GET", "/api/categories", None, Some(&alice))
        .await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_category() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let id = app.create_category(&token, "Invoices").await;

    let response = app
        .request("DELETE", &format!("/api/categories/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Category deleted successfully");

    let again = app
        .request("DELETE", &format!("/api/categories/{id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_category_keeps_documents() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let category = app.create_category(&token, "Invoices").await;

    let upload = app
        .upload(
            &token,
            "q1.txt",
            b"quarter one",
            &[("title", "Q1"), ("category_id", category.as_str())],
        )
        .await;
    assert_eq!(upload.status, StatusCode::OK);
    let doc_id = upload.body["id"].as_str().unwrap().to_string();

    app.request(
        "DELETE",
        &format!("/api/categories/{category}"),
        None,
        Some(&token),
    )
    .await;

    let doc = app
        .request("GET", &format!("/api/documents/{doc_id}"), None, Some(&token))
        .await;
    assert_eq!(doc.status, StatusCode::OK);
    assert_eq!(doc.body["category_id"], category.as_str());
}

#[tokio::test]
async fn test_malformed_category_id_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let response = app
        .request("DELETE", "/api/categories/not-an-id", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_category_name_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_categories_require_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/categories", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
