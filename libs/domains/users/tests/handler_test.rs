//! Handler tests for the users domain.
//!
//! These drive the users router directly (no full app, no live MongoDB)
//! over the in-memory adapter, verifying envelopes, status codes and the
//! literal error strings of the HTTP surface.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use core_config::upload::UploadConfig;
use domain_users::{handlers, User, UserRepository};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{MemoryAdapter, TestDataBuilder};
use tower::ServiceExt;

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_uploads(name: &str) -> UploadConfig {
    let builder = TestDataBuilder::from_test_name(name);
    UploadConfig::new(std::env::temp_dir().join(builder.name("uploads", "users")))
}

fn app_with_adapter(name: &str) -> (Router, UserRepository<MemoryAdapter<User>>) {
    let adapter = MemoryAdapter::<User>::new();
    let repository = UserRepository::new(adapter.clone());
    let app = handlers::router(UserRepository::new(adapter), test_uploads(name));
    (app, repository)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn user_payload(email: &str) -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": email,
        "password": "secret123",
    })
}

#[tokio::test]
async fn test_list_users_empty() {
    let (app, _) = app_with_adapter("users_list_empty");

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["payload"], json!([]));
}

#[tokio::test]
async fn test_create_user_returns_enveloped_user_without_password() {
    let (app, _) = app_with_adapter("users_create");

    let response = app
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["payload"]["email"], "jane@test.com");
    assert_eq!(body["payload"]["role"], "user");
    assert!(body["payload"].get("password").is_none());
}

#[tokio::test]
async fn test_create_user_stores_hashed_password() {
    let (app, repository) = app_with_adapter("users_create_hash");

    app.oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();

    let stored = repository
        .get_user_by_email("jane@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(stored.password, "secret123");
    assert!(stored.password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_create_user_incomplete_values() {
    let (app, _) = app_with_adapter("users_incomplete");

    let response = app
        .oneshot(post_json("/", json!({ "first_name": "Jane" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "Incomplete values");
}

#[tokio::test]
async fn test_create_duplicate_email_rejected() {
    let (app, _) = app_with_adapter("users_duplicate");

    let first = app
        .clone()
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = json_body(second.into_body()).await;
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let (app, _) = app_with_adapter("users_get_unknown");
    let builder = TestDataBuilder::from_test_name("users_get_unknown");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", builder.user_id()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_get_malformed_user_id_is_400() {
    let (app, _) = app_with_adapter("users_get_malformed");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_merges_only_supplied_fields() {
    let (app, repository) = app_with_adapter("users_update");

    let created = app
        .clone()
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let uid = created["payload"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", uid))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "first_name": "Janet" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "User updated");

    let stored = repository
        .get_user_by_email("jane@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.first_name, "Janet");
    // Untouched fields survive the merge
    assert_eq!(stored.last_name, "Doe");
}

#[tokio::test]
async fn test_update_unknown_user_is_404() {
    let (app, _) = app_with_adapter("users_update_unknown");
    let builder = TestDataBuilder::from_test_name("users_update_unknown");

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", builder.user_id()))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "first_name": "X" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_delete_user_then_404() {
    let (app, _) = app_with_adapter("users_delete");

    let created = app
        .clone()
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let uid = created["payload"]["id"].as_str().unwrap().to_string();

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", uid))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = json_body(first.into_body()).await;
    assert_eq!(body["message"], "User deleted");

    // The users controller checks existence, so the second delete is a 404
    let second = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", uid))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

fn multipart_request(uri: &str, files: &[(&str, &str)]) -> Request<Body> {
    let boundary = "test-boundary";
    let mut body = String::new();
    for (filename, content) in files {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"documents\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_documents_appends_references() {
    let (app, repository) = app_with_adapter("users_upload");

    let created = app
        .clone()
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let uid = created["payload"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(multipart_request(
            &format!("/{}/documents", uid),
            &[("cv.pdf", "pdf bytes"), ("id.png", "png bytes")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Documents uploaded successfully");

    let stored = repository
        .get_user_by_email("jane@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.documents.len(), 2);
    assert_eq!(stored.documents[0].name, "cv.pdf");
    assert!(stored.documents[0].reference.starts_with("/documents/"));
    assert!(stored.documents[0].reference.ends_with("cv.pdf"));
}

#[tokio::test]
async fn test_upload_without_files_is_400() {
    let (app, _) = app_with_adapter("users_upload_empty");

    let created = app
        .clone()
        .oneshot(post_json("/", user_payload("jane@test.com")))
        .await
        .unwrap();
    let created = json_body(created.into_body()).await;
    let uid = created["payload"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(multipart_request(&format!("/{}/documents", uid), &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "No files were uploaded");
}

#[tokio::test]
async fn test_upload_for_unknown_user_is_404() {
    let (app, _) = app_with_adapter("users_upload_unknown");
    let builder = TestDataBuilder::from_test_name("users_upload_unknown");

    let response = app
        .oneshot(multipart_request(
            &format!("/{}/documents", builder.user_id()),
            &[("cv.pdf", "pdf bytes")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User not found");
}
