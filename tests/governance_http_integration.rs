//! Integration tests for the FairGuard governance endpoints.
//!
//! Exercises the TTL cache through the HTTP surface: cache hits, the
//! simulation trigger, manual eviction, and downstream failure mapping.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use fairlend_gateway::adapters::http::governance::{governance_routes, GovernanceHandlers};
use fairlend_gateway::adapters::monitor::MockAiBackend;
use fairlend_gateway::application::governance::GovernanceSummaryCache;

fn build_app() -> (Router, Arc<MockAiBackend>) {
    let backend = Arc::new(MockAiBackend::new());
    let cache = Arc::new(GovernanceSummaryCache::new(backend.clone()));
    let app = governance_routes(GovernanceHandlers::new(cache));
    (app, backend)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn repeated_summary_requests_hit_the_cache() {
    let (app, backend) = build_app();

    let (status, body) = send(&app, "GET", "/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["windowSize"], 200);
    assert!(body["circuitBreaker"]["active"].as_bool().unwrap());

    let (status, _) = send(&app, "GET", "/summary").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn simulation_always_reaches_the_monitor_and_warms_the_cache() {
    let (app, backend) = build_app();

    let (status, _) = send(&app, "POST", "/simulate").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/simulate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(backend.simulate_calls.load(Ordering::SeqCst), 2);

    // The simulation result satisfies the next summary request.
    let (status, _) = send(&app, "GET", "/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn eviction_forces_a_fresh_fetch() {
    let (app, backend) = build_app();

    send(&app, "GET", "/summary").await;
    let (status, _) = send(&app, "DELETE", "/cache").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    send(&app, "GET", "/summary").await;

    assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn monitor_failure_maps_to_bad_gateway_not_stale_data() {
    let (app, backend) = build_app();

    // Warm the cache, then fail the backend and evict.
    send(&app, "GET", "/summary").await;
    backend.set_failing(true);
    send(&app, "DELETE", "/cache").await;

    let (status, body) = send(&app, "GET", "/summary").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "DOWNSTREAM_FAILURE");
}
