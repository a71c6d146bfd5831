// src/logging/mod.rs

use crate::middleware::auth::AuthenticatedUser;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// リクエストIDを受け渡すヘッダー
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// 実行時にレベルを選んでフィールド付きのイベントを出す
///
/// `tracing` のマクロはレベルを定数で受け取るため、レベルごとに分岐する。
#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        match $level {
            tracing::Level::ERROR => tracing::error!($($key = ?$value,)* "{}", $msg),
            tracing::Level::WARN => tracing::warn!($($key = ?$value,)* "{}", $msg),
            tracing::Level::INFO => tracing::info!($($key = ?$value,)* "{}", $msg),
            tracing::Level::DEBUG => tracing::debug!($($key = ?$value,)* "{}", $msg),
            _ => tracing::trace!($($key = ?$value,)* "{}", $msg),
        }
    }};
}

/// トレーシングの初期化（RUST_LOG があればそちらを優先）
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();
}

/// 1リクエスト分のログ用コンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
}

impl RequestContext {
    /// クライアントが送った `x-request-id` を引き継ぎ、無ければ採番する
    pub fn from_request(req: &Request<Body>) -> Self {
        let request_id = incoming_request_id(req.headers())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id,
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
        }
    }
}

fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
}

/// ステータスコードの区分に応じた完了ログのレベル
pub fn level_for_status(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// 開始・完了ログを出すミドルウェア
///
/// 認証済みユーザーは認証ミドルウェアがレスポンスに載せた `AuthenticatedUser` から取る。
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let Some(context) = req.extensions().get::<RequestContext>().cloned() else {
        return next.run(req).await;
    };

    let start = Instant::now();
    log_with_context!(
        Level::DEBUG,
        "Request started",
        request_id = &context.request_id,
        method = &context.method,
        path = &context.path,
    );

    let response = next.run(req).await;

    let status = response.status();
    let user_id = response
        .extensions()
        .get::<AuthenticatedUser>()
        .map(AuthenticatedUser::user_id);

    log_with_context!(
        level_for_status(status),
        "Request completed",
        request_id = &context.request_id,
        method = &context.method,
        path = &context.path,
        status = status.as_u16(),
        user_id = user_id,
        duration_ms = start.elapsed().as_millis(),
    );

    response
}

/// RequestContext を差し込み、レスポンスにリクエストIDを返すミドルウェア
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext::from_request(&req);
    let header_value = HeaderValue::from_str(&context.request_id).ok();

    req.extensions_mut().insert(context);
    let mut response = next.run(req).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
