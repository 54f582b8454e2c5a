//! Integration tests for consultant management

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_list_and_fetch_consultant() {
    let app = common::TestApp::new().await;
    let name = format!("Dr. {}", uuid::Uuid::new_v4());

    let (status, body) = app
        .post(
            "/consultants",
            json!({ "name": name, "specialty": "Cardiology" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, body) = app.get("/consultants").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&name.as_str()));

    let (status, body) = app.get(&format!("/consultant/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["specialty"], "Cardiology");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_fetch_unknown_consultant_is_404() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .get(&format!("/consultant/{}", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_consultant_requires_token() {
    let app = common::TestApp::new().await;

    let (_, body) = app
        .post(
            "/consultants",
            json!({ "name": "Dr. Gone", "specialty": "Dermatology" }),
        )
        .await;
    let id = body["insertedId"].as_str().unwrap().to_string();

    let (status, _) = app.delete(&format!("/consultants/{}", id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = app.token_for("anyone@example.com");
    let (status, body) = app
        .delete_auth(&format!("/consultants/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);
}
