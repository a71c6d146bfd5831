// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// 認証付きのHTTPリクエストを作成
pub fn create_request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    build(method, uri, Some(token), body)
}

/// 認証なしのHTTPリクエストを作成
pub fn create_anonymous_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    build(method, uri, None, body)
}

fn build(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// リクエストを送信してステータスとJSONボディを返す（空ボディは Null）
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
