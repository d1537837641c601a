use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt as _;

use super::*;
use crate::config::Config;

fn test_app() -> Router {
    app(Global::init(Config::default()).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_validate_ok() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(200).json_body(json!({ "code": 200, "routes": [] }));
        })
        .await;

    let (status, body) = send(
        test_app(),
        post_json("/provider/validate", json!({ "credentials": { "daily_hot_url": server.base_url() } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));
}

#[tokio::test]
async fn test_validate_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(200).json_body(json!({ "code": 200 }));
        })
        .await;

    let (status, body) = send(
        test_app(),
        post_json("/provider/validate", json!({ "credentials": { "daily_hot_url": server.base_url() } })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], 1000);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to validate DailyHot service: Health check failed: Unexpected API response format"));
}

#[tokio::test]
async fn test_invoke_returns_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/weibo").query_param("limit", "10");
            then.status(200).json_body(json!({ "code": 200, "data": [{ "title": "a" }] }));
        })
        .await;

    let (status, body) = send(
        test_app(),
        post_json(
            "/tools/daily-hot/invoke",
            json!({
                "credentials": { "daily_hot_url": server.base_url() },
                "tool_parameters": { "source": "weibo", "limit": 10 },
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source_name"], "微博");
}

#[tokio::test]
async fn test_invoke_failure_is_still_ok() {
    let (status, body) = send(
        test_app(),
        post_json("/tools/daily-hot/invoke", json!({ "tool_parameters": { "source": "friendster" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "Unknown source: friendster");
}

#[tokio::test]
async fn test_sources() {
    let request = Request::builder().uri("/tools/daily-hot/sources").body(Body::empty()).unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 38);
    assert_eq!(body[0], json!({ "key": "weibo", "name": "微博" }));
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder().uri("/v1/hot").body(Body::empty()).unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], 404);
    assert_eq!(body["error"], "route not found");
}
