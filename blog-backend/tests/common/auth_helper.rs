// tests/common/auth_helper.rs

use axum::{http::StatusCode, Router};
use serde_json::json;
use uuid::Uuid;

use crate::common::request::{create_anonymous_request, send};

pub const TEST_PASSWORD: &str = "MyUniqueP@ssw0rd91";

/// テスト用のユーザー情報
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i32,
    pub username: String,
    pub token: String,
}

/// 衝突しないユーザー名を生成
pub fn unique_username(prefix: &str) -> String {
    format!("{}{}", prefix, &Uuid::new_v4().simple().to_string()[..8])
}

/// ユーザー登録とトークン取得を行う
pub async fn create_and_authenticate_user(app: &Router) -> TestUser {
    let username = unique_username("user");

    let (status, body) = send(
        app,
        create_anonymous_request(
            "POST",
            "/users/register",
            Some(json!({"username": username, "password": TEST_PASSWORD})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    let id = body["id"].as_i64().unwrap() as i32;
    let token = obtain_token(app, &username, TEST_PASSWORD).await;

    TestUser {
        id,
        username,
        token,
    }
}

/// トークンを取得
pub async fn obtain_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        create_anonymous_request(
            "POST",
            "/auth/token",
            Some(json!({"username": username, "password": password})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "token request failed: {}", body);

    body["token"].as_str().unwrap().to_string()
}
