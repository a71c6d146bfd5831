// src/api/handlers/post_handler.rs
use crate::api::dto::post_dto::{CreatePostDto, PostDto, UpdatePostDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::IdPath;
use crate::middleware::auth::AuthenticatedUser;
use crate::shared::types::{PaginatedResponse, PaginationQuery};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

// --- CRUD Handlers ---

pub async fn list_posts_handler(
    State(app_state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<PaginatedResponse<PostDto>>> {
    let page = query.resolve(app_state.config.pagination.default_page_size);
    let posts = app_state.post_service.list_posts(page).await?;
    Ok(Json(posts))
}

pub async fn create_post_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePostDto>,
) -> AppResult<impl IntoResponse> {
    let post = app_state
        .post_service
        .create_post(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_post_handler(
    State(app_state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<PostDto>> {
    let post = app_state.post_service.get_post(id).await?;
    Ok(Json(post))
}

pub async fn update_post_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    Json(payload): Json<UpdatePostDto>,
) -> AppResult<Json<PostDto>> {
    let post = app_state
        .post_service
        .update_post(&user.claims, id, payload)
        .await?;
    Ok(Json(post))
}

pub async fn delete_post_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    app_state.post_service.delete_post(&user.claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Search ---

pub async fn search_posts_handler(
    State(app_state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<PaginatedResponse<PostDto>>> {
    let page = query.resolve(app_state.config.pagination.default_page_size);

    info!(term = %term, page = %page.page, "Searching posts");

    let posts = app_state.post_service.search_posts(&term, page).await?;
    Ok(Json(posts))
}

pub fn post_router(app_state: AppState) -> Router {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/posts/search/{term}", get(search_posts_handler))
        .with_state(app_state)
}
