//! E2E tests for the local session lifecycle.

mod common;

use axum::http::StatusCode;
use common::TestFixture;
use serde_json::json;

#[tokio::test]
async fn test_session_starts_as_guest() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/session").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["logged_in"], false);
    assert_eq!(response.body["display_name"], "Guest");
    assert!(response.body.get("identity").is_none());
}

#[tokio::test]
async fn test_login_creates_identity() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/session",
            json!({"username": "alice", "password": "whatever"}),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["display_name"], "alice");
    assert!(response.body["logged_in_at"].is_string());

    let session = fixture.get("/api/v1/session").await;
    assert_eq!(session.body["logged_in"], true);
    assert_eq!(session.body["display_name"], "alice");
    assert_eq!(session.body["identity"]["display_name"], "alice");
}

#[tokio::test]
async fn test_login_trims_username() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/session",
            json!({"username": "  bob  ", "password": "pw"}),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["display_name"], "bob");
}

#[tokio::test]
async fn test_login_rejects_blank_fields() {
    let fixture = TestFixture::new();

    let response = fixture
        .post("/api/v1/session", json!({"username": "   ", "password": "pw"}))
        .await;
    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);

    let response = fixture
        .post("/api/v1/session", json!({"username": "alice", "password": ""}))
        .await;
    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);

    // Failed logins leave the session untouched.
    let session = fixture.get("/api/v1/session").await;
    assert_eq!(session.body["logged_in"], false);
}

#[tokio::test]
async fn test_password_is_never_stored() {
    let fixture = TestFixture::new();

    let response = fixture
        .post(
            "/api/v1/session",
            json!({"username": "carol", "password": "s3cret"}),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);

    let session = fixture.get("/api/v1/session").await;
    let raw = serde_json::to_string(&session.body).unwrap();
    assert!(!raw.contains("s3cret"));
}

#[tokio::test]
async fn test_logout_clears_identity() {
    let fixture = TestFixture::new();

    fixture
        .post(
            "/api/v1/session",
            json!({"username": "dave", "password": "pw"}),
        )
        .await;

    let response = fixture.delete("/api/v1/session").await;
    assert_status!(response, StatusCode::NO_CONTENT);

    let session = fixture.get("/api/v1/session").await;
    assert_eq!(session.body["logged_in"], false);
    assert_eq!(session.body["display_name"], "Guest");
}

#[tokio::test]
async fn test_relogin_replaces_identity() {
    let fixture = TestFixture::new();

    fixture
        .post(
            "/api/v1/session",
            json!({"username": "first", "password": "pw"}),
        )
        .await;
    fixture
        .post(
            "/api/v1/session",
            json!({"username": "second", "password": "pw"}),
        )
        .await;

    let session = fixture.get("/api/v1/session").await;
    assert_eq!(session.body["display_name"], "second");
}
