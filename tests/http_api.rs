mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use foobar_service::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn test_app() -> Router {
    app(common::memory_state().await)
}

#[tokio::test]
async fn home_reports_running() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["data"], "Running");
}

#[tokio::test]
async fn create_returns_created_envelope() {
    let app = test_app().await;
    let (status, body) = send(&app, "POST", "/foobar/", Some(json!({"foobar_content": "hello"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["message"], "POST foobar with id 1 success");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["foobar_content"], "hello");
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let app = test_app().await;
    let (_, created) = send(&app, "POST", "/foobar", Some(json!({"foobar_content": "round"}))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/foobar/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created["data"]);
}

#[tokio::test]
async fn fetch_lists_all() {
    let app = test_app().await;
    for content in ["a", "b"] {
        send(&app, "POST", "/foobar/", Some(json!({"foobar_content": content}))).await;
    }
    let (status, body) = send(&app, "GET", "/foobars/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = send(&app, "GET", "/foobars", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn get_missing_is_not_found_with_null_data() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/foobar/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn non_numeric_ids_are_bad_gateway() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/foobar/abc", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "GET foobar failed");

    let (status, _) = send(&app, "DELETE", "/foobar/delete/abc", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, body) = send(&app, "DELETE", "/foobar/abc", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "DELETE foobar failed");
}

#[tokio::test]
async fn invalid_payloads_are_bad_request() {
    let app = test_app().await;
    let (status, body) = send(&app, "POST", "/foobar/", Some(json!({"foobar_content": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"][0]["field"], "foobar_content");

    let (status, body) = send(&app, "POST", "/foobar/", Some(json!({"foobar_content": 12}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/foobar/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_changes_only_submitted_fields() {
    let app = test_app().await;
    let (_, created) = send(&app, "POST", "/foobar/", Some(json!({"foobar_content": "v1"}))).await;

    let (status, body) = send(&app, "PATCH", "/foobar/update/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["foobar_content"], "v1");

    let (status, body) = send(&app, "PATCH", "/foobar/update/1", Some(json!({"id": 1, "foobar_content": "v2"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["foobar_content"], "v2");
    assert_eq!(body["data"]["created_at"], created["data"]["created_at"]);
}

#[tokio::test]
async fn update_errors() {
    let app = test_app().await;
    send(&app, "POST", "/foobar/", Some(json!({"foobar_content": "v1"}))).await;

    let (status, _) = send(&app, "PATCH", "/foobar/update/999", Some(json!({"foobar_content": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PATCH", "/foobar/update/1", Some(json!({"id": 2, "foobar_content": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PATCH", "/foobar/update/1", Some(json!({"foobar_content": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = test_app().await;
    send(&app, "POST", "/foobar/", Some(json!({"foobar_content": "gone"}))).await;

    let (status, body) = send(&app, "DELETE", "/foobar/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], 1);

    let (status, _) = send(&app, "GET", "/foobar/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/foobar/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_resource_path() {
    let app = test_app().await;
    send(&app, "POST", "/foobar/", Some(json!({"foobar_content": "short path"}))).await;

    let (status, body) = send(&app, "DELETE", "/foobar/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], 1);
}

#[tokio::test]
async fn readiness_checks_database() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "GET ready success");
    assert_eq!(body["data"]["database"], "ok");
}

#[tokio::test]
async fn readiness_reports_closed_pool() {
    let state = common::memory_state().await;
    state.pool.close().await;
    let (status, body) = send(&app(state), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["statusCode"], 503);
    assert_eq!(body["data"]["database"], "unavailable");
}

#[tokio::test]
async fn health_and_version_use_envelopes() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["data"]["status"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "foobar-service");
    assert!(body["data"]["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn oversized_body_is_bad_request_envelope() {
    let app = test_app().await;
    let content = "x".repeat(foobar_service::routes::MAX_BODY_BYTES + 1);
    let (status, body) = send(&app, "POST", "/foobar/", Some(json!({ "foobar_content": content }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "POST foobar failed");

    let (status, _) = send(&app, "GET", "/foobars", None).await;
    assert_eq!(status, StatusCode::OK);
}
