// tests/integration/auth_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_and_authenticate_user, obtain_token, unique_username, TEST_PASSWORD},
    request::{create_anonymous_request, create_request, send},
};

#[tokio::test]
async fn test_register_returns_id_and_username_only() {
    let (app, _db) = setup_app().await;
    let username = unique_username("alice");

    let (status, body) = send(
        &app,
        create_anonymous_request(
            "POST",
            "/users/register",
            Some(json!({"username": username, "password": TEST_PASSWORD})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["username"], username);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;

    let (status, body) = send(
        &app,
        create_anonymous_request(
            "POST",
            "/users/register",
            Some(json!({"username": user.username, "password": TEST_PASSWORD})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["username"][0],
        "A user with that username already exists."
    );
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let (app, _db) = setup_app().await;

    let (status, body) = send(
        &app,
        create_anonymous_request(
            "POST",
            "/users/register",
            Some(json!({"username": unique_username("bob"), "password": "12345678"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages = body["errors"]["password"].as_array().unwrap();
    assert!(messages
        .iter()
        .any(|m| m == "This password is entirely numeric."));
}

#[tokio::test]
async fn test_token_with_wrong_password() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;

    let (status, body) = send(
        &app,
        create_anonymous_request(
            "POST",
            "/auth/token",
            Some(json!({"username": user.username, "password": "not-the-password"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Unable to log in with provided credentials."
    );
}

#[tokio::test]
async fn test_issued_token_authenticates_writes() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    let token = obtain_token(&app, &user.username, TEST_PASSWORD).await;

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/posts",
            &token,
            Some(json!({"title": "First", "content": "Hello"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"], user.id);
}
