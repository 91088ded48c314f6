//! Integration tests for document upload, search, update, download, and delete.

mod helpers;

use axum::http::{StatusCode, header};

#[tokio::test]
async fn test_upload_document() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let response = app
        .upload(
            &token,
            "report.txt",
            b"quarterly numbers",
            &[("title", "Quarterly Report"), ("tags", "finance, q1,,")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["title"], "Quarterly Report");
    assert_eq!(response.body["file_name"], "report.txt");
    assert_eq!(response.body["file_type"], "text/plain");
    assert_eq!(response.body["file_size"], 17);
    assert_eq!(response.body["tags"], serde_json::json!(["finance", "q1"]));
    assert!(response.body["category_id"].is_null());
    assert!(response.body.get("file_path").is_none());
    assert!(response.body.get("user_id").is_none());
    assert_eq!(app.stored_file_count(), 1);
}

#[tokio::test]
async fn test_upload_without_title_leaves_no_file() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let response = app.upload(&token, "report.txt", b"data", &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_file_count(), 0);

    let list = app.request("GET", "/api/documents", None, Some(&token)).await;
    assert!(list.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_part() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    let body = helpers::multipart_body(None, &[("title", "No file")]);
    let response = app
        .send(helpers::multipart_request(body, Some(&token)))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_requires_auth() {
    let app = helpers::TestApp::new().await;

    let body = helpers::multipart_body(Some(("a.txt", "text/plain", b"x")), &[("title", "A")]);
    let response = app.send(helpers::multipart_request(body, None)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_same_file_name_gets_distinct_storage() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    app.upload_ok(&token, "First", "same.txt", b"one").await;
    app.upload_ok(&token, "Second", "same.txt", b"two").await;

    assert_eq!(app.stored_file_count(), 2);
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let invoices = app.create_category(&token, "Invoices").await;

    app.upload(
        &token,
        "inv.txt",
        b"invoice",
        &[("title", "Invoice 7"), ("category_id", invoices.as_str())],
    )
    .await;
    app.upload_ok(&token, "Loose note", "note.txt", b"note").await;

    let all = app.request("GET", "/api/documents", None, Some(&token)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);

    let filtered = app
        .request(
            "GET",
            &format!("/api/documents?category_id={invoices}"),
            None,
            Some(&token),
        )
        .await;
    let docs = filtered.body.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["title"], "Invoice 7");

    let bogus = app
        .request(
            "GET",
            "/api/documents?category_id=not-an-id",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(bogus.status, StatusCode::OK);
    assert!(bogus.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_matches_title_file_name_and_tags() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;

    app.upload(&token, "a.txt", b"a", &[("title", "Annual Budget")])
        .await;
    app.upload(&token, "budget-notes.txt", b"b", &[("title", "Notes")])
        .await;
    app.upload(
        &token,
        "c.txt",
        b"c",
        &[("title", "Misc"), ("tags", "BUDGET,draft")],
    )
    .await;
    app.upload(&token, "d.txt", b"d", &[("title", "Holiday")])
        .await;

    let response = app
        .request("GET", "/api/documents?search=budget", None, Some(&token))
        .await;
    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Annual Budget", "Notes", "Misc"]);

    // Metacharacters are matched literally.
    let literal = app
        .request("GET", "/api/documents?search=.*", None, Some(&token))
        .await;
    assert!(literal.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_documents_are_private() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice", "alice@example.com", "s3cret").await;
    let bob = app.register("bob", "bob@example.com", "s3cret").await;

    let id = app.upload_ok(&alice, "Secret", "secret.txt", b"shh").await;
    let path = format!("/api/documents/{id}");

    let list = app.request("GET", "/api/documents", None, Some(&bob)).await;
    assert!(list.body.as_array().unwrap().is_empty());

    for method in ["GET", "DELETE"] {
        let response = app.request(method, &path, None, Some(&bob)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Document not found");
    }

    let update = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "title": "Mine now" })),
            Some(&bob),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let download = app
        .request("GET", &format!("{path}/download"), None, Some(&bob))
        .await;
    assert_eq!(download.status, StatusCode::NOT_FOUND);

    let own = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["title"], "Secret");
}

#[tokio::test]
async fn test_update_document() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let category = app.create_category(&token, "Archive").await;
    let id = app.upload_ok(&token, "Draft", "draft.txt", b"v1").await;
    let path = format!("/api/documents/{id}");

    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({
                "title": "Final",
                "category_id": category,
                "tags": ["done"],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["title"], "Final");
    assert_eq!(response.body["category_id"], category.as_str());
    assert_eq!(response.body["tags"], serde_json::json!(["done"]));
    assert_eq!(response.body["file_name"], "draft.txt");

    // null and absent fields leave values unchanged
    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "category_id": null })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Final");
    assert_eq!(response.body["category_id"], category.as_str());
}

#[tokio::test]
async fn test_download_document() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let id = app
        .upload_ok(&token, "Contract", "contract.txt", b"signed terms")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/documents/{id}/download"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.raw, b"signed terms");
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(
        response.headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"contract.txt\""
    );
}

#[tokio::test]
async fn test_download_missing_content() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let id = app.upload_ok(&token, "Gone", "gone.txt", b"bytes").await;

    for entry in std::fs::read_dir(app.upload_dir.path()).unwrap() {
        std::fs::remove_file(entry.unwrap().path()).unwrap();
    }

    let response = app
        .request(
            "GET",
            &format!("/api/documents/{id}/download"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "File not found");
}

#[tokio::test]
async fn test_delete_document_removes_file() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let id = app.upload_ok(&token, "Temp", "temp.txt", b"tmp").await;
    let path = format!("/api/documents/{id}");
    assert_eq!(app.stored_file_count(), 1);

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Document deleted successfully");
    assert_eq!(app.stored_file_count(), 0);

    let again = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_document_with_missing_file_still_succeeds() {
    let app = helpers::TestApp::new().await;
    let token = app.register("alice", "alice@example.com", "s3cret").await;
    let id = app.upload_ok(&token, "Orphan", "orphan.txt", b"x").await;

    for entry in std::fs::read_dir(app.upload_dir.path()).unwrap() {
        std::fs::remove_file(entry.unwrap().path()).unwrap();
    }

    let response = app
        .request("DELETE", &format!("/api/documents/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
