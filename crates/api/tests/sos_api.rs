//! Integration tests for the SOS button flow.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: idle SOS offers the trigger dialog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inactive_sos_offers_trigger_prompt() {
    let t = common::build_test_app();
    let json = body_json(get(t.app(), "/api/v1/sos").await).await;

    assert_eq!(json["data"]["active"], false);
    assert_eq!(json["data"]["state"]["state"], "inactive");
    assert_eq!(json["data"]["prompt"]["action"], "trigger");
    assert_eq!(json["data"]["prompt"]["title"], "Confirm Emergency Alert");
    assert_eq!(json["data"]["prompt"]["confirm_label"], "Yes, Send Alert");
}

// ---------------------------------------------------------------------------
// Test: trigger, stale trigger, cancel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trigger_then_cancel_appends_one_sos_alert() {
    let t = common::build_test_app();

    let response = post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "trigger"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["active"], true);
    assert_eq!(json["data"]["alert"]["severity"], "sos");
    assert_eq!(json["data"]["alert"]["sensor_id"], "sos1");
    assert_eq!(json["data"]["alert"]["message"], "SOS Emergency Button Activated!");
    assert_eq!(json["data"]["toast"]["title"], "SOS ACTIVATED");
    assert_eq!(json["data"]["toast"]["duration_ms"], 10000);

    let json = body_json(get(t.app(), "/api/v1/sos").await).await;
    assert_eq!(json["data"]["prompt"]["action"], "cancel");
    assert_eq!(json["data"]["prompt"]["dismiss_label"], "Keep Alert Active");

    // A stale trigger dialog confirmed again is a conflict.
    let response = post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "trigger"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "cancel"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["active"], false);
    assert!(json["data"]["alert"].is_null());
    assert_eq!(json["data"]["toast"]["title"], "SOS Cancelled");

    let json = body_json(get(t.app(), "/api/v1/alerts").await).await;
    let alerts = json["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["severity"], "sos");
}

// ---------------------------------------------------------------------------
// Test: cancel while inactive is a conflict
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancel_while_inactive_is_conflict() {
    let t = common::build_test_app();
    let response = post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "cancel"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: unknown action is rejected by the JSON extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_action_is_rejected() {
    let t = common::build_test_app();
    let response = post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "panic"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: SOS dialog and dashboard describe the same state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sos_and_summary_agree_after_trigger() {
    let t = common::build_test_app();
    post_json(t.app(), "/api/v1/sos/confirm", json!({"action": "trigger"})).await;

    let sos = body_json(get(t.app(), "/api/v1/sos").await).await;
    assert_eq!(sos["data"]["active"], true);
    assert_eq!(sos["data"]["state"]["state"], "active");
    assert_eq!(sos["data"]["prompt"]["action"], "cancel");

    let summary = body_json(get(t.app(), "/api/v1/readings/summary").await).await;
    assert_eq!(summary["data"]["sos_active"], true);
    assert_eq!(summary["data"]["unacknowledged_alerts"], 1);
    assert_eq!(summary["data"]["recent_alerts"][0]["severity"], "sos");
}
