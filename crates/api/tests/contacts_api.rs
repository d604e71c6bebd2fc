//! Integration tests for emergency contact management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: the session starts with the seeded contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_contains_seeded_contact() {
    let t = common::build_test_app();
    let json = body_json(get(t.app(), "/api/v1/contacts").await).await;

    let contacts = json["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["id"], "contact1");
    assert_eq!(contacts[0]["name"], "Jane Doe");
    assert_eq!(contacts[0]["notify_on"], json!(["critical", "sos"]));
}

// ---------------------------------------------------------------------------
// Test: create returns 201 and defaults notify_on to sos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_contact_returns_201() {
    let t = common::build_test_app();
    let response = post_json(
        t.app(),
        "/api/v1/contacts",
        json!({"name": "Sam Roe", "relationship": "Brother", "phone": "+1-555-987-6543"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["data"]["id"].as_str().unwrap();
    assert!(id.starts_with("contact-"));
    assert_eq!(json["data"]["notify_on"], json!(["sos"]));
    assert_eq!(json["data"]["email"], "");

    let json = body_json(get(t.app(), "/api/v1/contacts").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jane Doe", "Sam Roe"]);
}

// ---------------------------------------------------------------------------
// Test: incomplete input is a silent no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_name_or_phone_is_noop() {
    let t = common::build_test_app();

    for body in [
        json!({"name": "", "phone": "555"}),
        json!({"name": "Sam", "phone": "  "}),
    ] {
        let response = post_json(t.app(), "/api/v1/contacts", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["data"].is_null());
    }

    let json = body_json(get(t.app(), "/api/v1/contacts").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: omitted name or phone is the same silent no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_name_or_phone_is_noop() {
    let t = common::build_test_app();

    for body in [
        json!({"phone": "555"}),
        json!({"name": "Sam"}),
        json!({}),
    ] {
        let response = post_json(t.app(), "/api/v1/contacts", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["data"].is_null());
    }

    let json = body_json(get(t.app(), "/api/v1/contacts").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: add then remove restores the list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_then_remove_restores_length() {
    let t = common::build_test_app();
    let created = body_json(
        post_json(t.app(), "/api/v1/contacts", json!({"name": "Sam", "phone": "555"})).await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = delete(t.app(), &format!("/api/v1/contacts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(t.app(), "/api/v1/contacts").await).await;
    let contacts = json["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(contacts.iter().all(|c| c["id"] != id.as_str()));

    // Contacts are also visible through the profile.
    let json = body_json(get(t.app(), "/api/v1/profile").await).await;
    assert_eq!(json["data"]["emergency_contacts"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: removing an unknown id is 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_unknown_contact_returns_404() {
    let t = common::build_test_app();
    let response = delete(t.app(), "/api/v1/contacts/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
