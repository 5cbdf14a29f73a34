mod common;

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use playlist_sync::{
    Error,
    http::{self, RetryPolicy},
};
use reqwest::Client;
use serde_json::{Value, json};

#[derive(Default)]
struct Hits {
    flaky: AtomicUsize,
    down: AtomicUsize,
    throttled: AtomicUsize,
    too_slow: AtomicUsize,
    missing: AtomicUsize,
}

// 502 twice, then OK
async fn flaky(State(hits): State<Arc<Hits>>) -> Response {
    if hits.flaky.fetch_add(1, Ordering::SeqCst) < 2 {
        StatusCode::BAD_GATEWAY.into_response()
    } else {
        Json(json!({ "ok": true })).into_response()
    }
}

async fn down(State(hits): State<Arc<Hits>>) -> StatusCode {
    hits.down.fetch_add(1, Ordering::SeqCst);
    StatusCode::BAD_GATEWAY
}

// 429 once with a zero delay, then OK
async fn throttled(State(hits): State<Arc<Hits>>) -> Response {
    if hits.throttled.fetch_add(1, Ordering::SeqCst) == 0 {
        (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "0")]).into_response()
    } else {
        Json(json!({ "ok": true })).into_response()
    }
}

async fn too_slow(State(hits): State<Arc<Hits>>) -> Response {
    hits.too_slow.fetch_add(1, Ordering::SeqCst);
    (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "121")]).into_response()
}

async fn missing(State(hits): State<Arc<Hits>>) -> StatusCode {
    hits.missing.fetch_add(1, Ordering::SeqCst);
    StatusCode::NOT_FOUND
}

async fn start() -> (String, Arc<Hits>) {
    let hits = Arc::new(Hits::default());
    let state = Arc::clone(&hits);
    let base = common::serve(move |_| {
        Router::new()
            .route("/flaky", get(flaky))
            .route("/down", get(down))
            .route("/throttled", get(throttled))
            .route("/too-slow", get(too_slow))
            .route("/missing", get(missing))
            .with_state(state)
    })
    .await;
    (base, hits)
}

fn no_wait() -> RetryPolicy {
    RetryPolicy {
        bad_gateway_delay: Duration::ZERO,
        ..RetryPolicy::default()
    }
}

fn status_of(err: Error) -> Option<reqwest::StatusCode> {
    match err {
        Error::Http(e) => e.status(),
        other => panic!("expected http error, got {other:?}"),
    }
}

#[test]
fn test_default_retry_policy() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.max_retries, 5);
    assert_eq!(policy.bad_gateway_delay, Duration::from_secs(10));
    assert_eq!(policy.max_retry_after, Duration::from_secs(120));
}

#[tokio::test]
async fn test_bad_gateway_is_retried() {
    let (base, hits) = start().await;
    let client = Client::new();
    let url = format!("{base}/flaky");

    let response = http::send_with(&no_wait(), || client.get(&url)).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(hits.flaky.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_bad_gateway_gives_up_after_max_retries() {
    let (base, hits) = start().await;
    let client = Client::new();
    let url = format!("{base}/down");

    let err = http::send_with(&no_wait(), || client.get(&url)).await.unwrap_err();

    assert_eq!(status_of(err), Some(reqwest::StatusCode::BAD_GATEWAY));
    // first attempt plus five retries
    assert_eq!(hits.down.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn test_too_many_requests_waits_for_retry_after() {
    let (base, hits) = start().await;
    let client = Client::new();
    let url = format!("{base}/throttled");

    let body: Value = http::get_json(|| client.get(&url)).await.unwrap();

    assert_eq!(body, json!({ "ok": true }));
    assert_eq!(hits.throttled.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_retry_after_above_limit_is_an_error() {
    let (base, hits) = start().await;
    let client = Client::new();
    let url = format!("{base}/too-slow");

    let err = http::send(|| client.get(&url)).await.unwrap_err();

    assert_eq!(status_of(err), Some(reqwest::StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(hits.too_slow.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_other_errors_are_not_retried() {
    let (base, hits) = start().await;
    let client = Client::new();
    let url = format!("{base}/missing");

    let err = http::send(|| client.get(&url)).await.unwrap_err();

    assert_eq!(status_of(err), Some(reqwest::StatusCode::NOT_FOUND));
    assert_eq!(hits.missing.load(Ordering::SeqCst), 1);
}
