// src/middleware/auth.rs

use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::utils::jwt::JwtManager;
use crate::utils::permission::PermissionChecker;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};

const MISSING_CREDENTIALS_MESSAGE: &str = "Authentication credentials were not provided.";
const INVALID_TOKEN_MESSAGE: &str = "Invalid token.";

/// JWT認証ミドルウェアの設定
#[derive(Clone)]
pub struct AuthMiddlewareConfig {
    pub jwt_manager: Arc<JwtManager>,
    pub skip_auth_paths: Vec<String>,
}

impl AuthMiddlewareConfig {
    pub fn new(jwt_manager: Arc<JwtManager>) -> Self {
        Self {
            jwt_manager,
            skip_auth_paths: vec![
                "/health".to_string(),
                "/auth/token".to_string(),
                "/users/register".to_string(),
            ],
        }
    }
}

/// 認証済みユーザー情報を格納するエクステンション
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: UserClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> i32 {
        self.claims.user_id
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(MISSING_CREDENTIALS_MESSAGE.to_string()))
    }
}

/// JWT認証ミドルウェア（認証済み、または読み取り専用）
///
/// トークンがあれば検証してユーザーをリクエストとレスポンスに追加する。
/// トークンがない場合は GET / HEAD / OPTIONS のみ通過させる。
pub async fn jwt_auth_middleware(
    State(config): State<AuthMiddlewareConfig>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if should_skip_auth(&path, &config.skip_auth_paths) {
        return Ok(next.run(request).await);
    }

    let user = match extract_token(&headers) {
        Some(token) => {
            let access_claims = config
                .jwt_manager
                .verify_access_token(&token)
                .map_err(|e| {
                    warn!(path = %path, error = %e, "Invalid access token");
                    AppError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
                })?;

            debug!(
                user_id = %access_claims.user.user_id,
                path = %path,
                "Authenticated request"
            );

            Some(AuthenticatedUser::new(access_claims.user))
        }
        None if PermissionChecker::is_safe_method(request.method()) => None,
        None => {
            warn!(
                path = %path,
                method = %request.method(),
                "Missing authentication token"
            );
            return Err(AppError::Unauthorized(
                MISSING_CREDENTIALS_MESSAGE.to_string(),
            ));
        }
    };

    if let Some(user) = &user {
        request.extensions_mut().insert(user.clone());
    }

    let mut response = next.run(request).await;

    // 完了ログ用にレスポンスにも載せる
    if let Some(user) = user {
        response.extensions_mut().insert(user);
    }

    Ok(response)
}

/// CORS 設定
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

// --- ヘルパー関数 ---

/// Authorization ヘッダーから Bearer トークンを抽出
fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// 認証をスキップするパスかチェック
fn should_skip_auth(path: &str, skip_paths: &[String]) -> bool {
    skip_paths.iter().any(|skip_path| path == skip_path)
}
