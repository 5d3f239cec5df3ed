use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use countdown_timer::{create_router, AppState};
use serde_json::{json, Value};
use tokio::time::sleep;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(AppState::new(20554, "127.0.0.1".to_string())))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn click(app: &Router, uri: &str) -> Value {
    let (status, body) = call(app, Method::POST, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    body["timer"].clone()
}

#[tokio::test(start_paused = true)]
async fn countdown_scenario_over_http() {
    let app = app();

    let (status, body) = call(&app, Method::PUT, "/input", Some(json!({ "value": "10" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["input"]["value"], "10");
    assert_eq!(body["timer"]["display"], "00:00");

    let timer = click(&app, "/set").await;
    assert_eq!(timer["display"], "00:10");
    assert_eq!(timer["activity"], "idle");

    click(&app, "/start").await;
    sleep(Duration::from_millis(3500)).await;
    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["timer"]["display"], "00:07");
    assert_eq!(status["timer"]["activity"], "running");

    let timer = click(&app, "/toggle").await;
    assert_eq!(timer["pause_label"], "Resume");
    assert_eq!(timer["display"], "00:07");
    sleep(Duration::from_secs(4)).await;
    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["timer"]["display"], "00:07");

    let timer = click(&app, "/toggle").await;
    assert_eq!(timer["pause_label"], "Pause");
    sleep(Duration::from_millis(7500)).await;
    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["timer"]["display"], "00:00");
    assert_eq!(status["timer"]["activity"], "running");

    let timer = click(&app, "/reset").await;
    assert_eq!(timer["display"], "00:10");
    assert_eq!(timer["activity"], "idle");
}

#[tokio::test]
async fn set_accepts_inline_value() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/set", Some(json!({ "value": "3661" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "set");
    assert_eq!(body["timer"]["display"], "61:01");
    assert_eq!(body["timer"]["duration"], 3661);
}

#[tokio::test]
async fn set_rejects_malformed_body_and_keeps_state() {
    let app = app();
    call(&app, Method::POST, "/set", Some(json!({ "value": "30" }))).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/set")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{bad"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["last_action"], "set");
    assert_eq!(status["timer"]["display"], "00:30");
    assert_eq!(status["timer"]["input"]["value"], "30");
}

#[tokio::test]
async fn set_without_body_commits_the_draft() {
    let app = app();
    call(&app, Method::PUT, "/input", Some(json!({ "value": "1.5" }))).await;
    let timer = click(&app, "/set").await;
    assert_eq!(timer["duration"], 2);
    assert_eq!(timer["display"], "00:02");
}

#[tokio::test]
async fn invalid_duration_is_ignored_without_error() {
    let app = app();
    call(&app, Method::POST, "/set", Some(json!({ "value": "65" }))).await;

    for value in ["", "0", "-10", "soon"] {
        let (status, body) = call(&app, Method::POST, "/set", Some(json!({ "value": value }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["display"], "01:05");
        assert_eq!(body["timer"]["duration"], 65);
        assert!(body.get("error").is_none());
    }
}

#[tokio::test]
async fn start_without_duration_does_nothing() {
    let app = app();
    let timer = click(&app, "/start").await;
    assert_eq!(timer["activity"], "idle");
    assert_eq!(timer["display"], "00:00");

    let timer = click(&app, "/pause").await;
    assert_eq!(timer["activity"], "idle");
    assert_eq!(timer["pause_label"], "Pause");
}

#[tokio::test]
async fn status_reports_view_and_last_action() {
    let app = app();
    click(&app, "/reset").await;

    let (status, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_action"], "reset");
    assert_eq!(body["port"], 20554);
    assert_eq!(body["timer"]["title"], "Countdown Timer");
    assert_eq!(body["timer"]["input"]["placeholder"], "Enter time in seconds");
}

#[tokio::test]
async fn health_check() {
    let (status, body) = call(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
