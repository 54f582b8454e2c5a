//! Integration tests for appointment booking and listing

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn booking(email: &str) -> serde_json::Value {
    json!({
        "userEmail": email,
        "service": "Full Body Checkup",
        "date": "2026-09-15",
        "timeSlot": "10:00 - 10:30",
        "patientName": "Pat",
        "phone": "555-0100",
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_appointments_as_owner() {
    let app = common::TestApp::new().await;
    let email = format!("booker_{}@example.com", uuid::Uuid::new_v4());

    let (status, body) = app.post("/appointments", booking(&email)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["acknowledged"], true);

    let token = app.token_for(&email);
    let (status, body) = app
        .get_auth(&format!("/appointments/{}", email), &token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["userEmail"], email.as_str());
    assert_eq!(items[0]["timeSlot"], "10:00 - 10:30");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_listing_someone_elses_appointments_is_forbidden() {
    let app = common::TestApp::new().await;
    let owner = format!("owner_{}@example.com", uuid::Uuid::new_v4());
    let snoop = format!("snoop_{}@example.com", uuid::Uuid::new_v4());

    app.post("/appointments", booking(&owner)).await;

    let token = app.token_for(&snoop);
    let (status, body) = app
        .get_auth(&format!("/appointments/{}", owner), &token)
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden Access");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_listing_without_token_is_unauthorized() {
    let app = common::TestApp::new().await;
    let email = format!("booker_{}@example.com", uuid::Uuid::new_v4());

    let (status, body) = app.get(&format!("/appointments/{}", email)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized Access");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_appointment() {
    let app = common::TestApp::new().await;
    let email = format!("booker_{}@example.com", uuid::Uuid::new_v4());

    let (_, body) = app.post("/appointments", booking(&email)).await;
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/appointments/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    // Deleting again acknowledges with a zero count
    let (status, body) = app.delete(&format!("/appointments/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_with_malformed_id_is_rejected() {
    let app = common::TestApp::new().await;

    let (status, _) = app.delete("/appointments/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
