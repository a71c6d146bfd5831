// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{RegisterRequest, RegisterResponse, TokenRequest, TokenResponse};
use crate::api::AppState;
use crate::error::AppResult;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::info;

/// ユーザー登録
pub async fn register_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    info!(username = %payload.username, "Registration attempt");

    let user = app_state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// アクセストークン発行
pub async fn token_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = app_state.auth_service.issue_token(payload).await?;
    Ok(Json(token))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users/register", post(register_handler))
        .route("/auth/token", post(token_handler))
        .with_state(app_state)
}
