// tests/common/test_data.rs

use axum::{http::StatusCode, Router};
use blog_backend::domain::post_model;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{json, Value};

use crate::common::request::{create_request, send};

/// API経由で投稿を作成
pub async fn create_post(app: &Router, token: &str, title: &str, content: &str) -> Value {
    let (status, body) = send(
        app,
        create_request(
            "POST",
            "/posts",
            token,
            Some(json!({"title": title, "content": content})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create post failed: {}", body);
    body
}

/// 作成日時を指定して投稿を直接登録
pub async fn insert_post_at(
    db: &DatabaseConnection,
    author_id: i32,
    title: &str,
    created_at: DateTime<Utc>,
) -> post_model::Model {
    post_model::ActiveModel {
        title: Set(title.to_string()),
        content: Set(format!("content of {}", title)),
        author_id: Set(author_id),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
