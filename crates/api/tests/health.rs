//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let t = common::build_test_app();
    let response = get(t.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_open"], true);
    assert_eq!(json["ws_connections"], 0);
}

// ---------------------------------------------------------------------------
// Test: after store shutdown, health degrades and reads return 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn closed_store_degrades_health_and_fails_reads() {
    let t = common::build_test_app();
    let app = t.app();
    t.store.shutdown().await;

    let json = body_json(get(app.clone(), "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_open"], false);

    let response = get(app, "/api/v1/readings").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_CLOSED");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let t = common::build_test_app();
    let response = get(t.app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let t = common::build_test_app();
    let response = get(t.app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let t = common::build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/contacts")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = t.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: emergency services directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn emergency_services_are_listed() {
    let t = common::build_test_app();
    let json = body_json(get(t.app(), "/api/v1/emergency-services").await).await;

    let services = json["data"].as_array().expect("data array");
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["phone"], "911");
    assert_eq!(services[1]["phone"], "1-800-222-1222");
    assert_eq!(services[1]["description"], "Toxicology Emergency");
}
