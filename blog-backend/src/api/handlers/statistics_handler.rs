// src/api/handlers/statistics_handler.rs
use crate::api::dto::statistics_dto::UserPostStatisticsResponse;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::parse_id;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// ユーザーの月別投稿統計
pub async fn user_statistics_handler(
    State(app_state): State<AppState>,
    Path(raw_user_id): Path<String>,
) -> AppResult<Json<UserPostStatisticsResponse>> {
    // 整数でないIDは存在しないユーザーとして扱う
    let user_id = parse_id(&raw_user_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let report = app_state
        .statistics_service
        .user_statistics(user_id)
        .await?;

    Ok(Json(report.into()))
}

pub fn statistics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/statistics/{user_id}", get(user_statistics_handler))
        .route("/posts/statistics/{user_id}", get(user_statistics_handler))
        .with_state(app_state)
}
