// src/service/post_service.rs

use crate::api::dto::post_dto::{CreatePostDto, PostDto, UpdatePostDto};
use crate::db::DbPool;
use crate::domain::post_model;
use crate::domain::user_model::UserClaims;
use crate::error::{AppError, AppResult};
use crate::repository::post_repository::PostRepository;
use crate::shared::types::{PageRequest, PaginatedResponse};
use crate::utils::permission::PermissionChecker;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to perform this action.";

pub struct PostService {
    repo: Arc<PostRepository>,
}

impl PostService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(PostRepository::new(db_pool)),
        }
    }

    // --- 参照 ---

    pub async fn list_posts(&self, page: PageRequest) -> AppResult<PaginatedResponse<PostDto>> {
        let (posts, total_count) = self.repo.find_page(page).await?;
        page.ensure_in_range(total_count)?;

        Ok(PaginatedResponse::new(posts, page, total_count).map(PostDto::from))
    }

    pub async fn search_posts(
        &self,
        term: &str,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<PostDto>> {
        let (posts, total_count) = self.repo.search_page(term, page).await?;
        page.ensure_in_range(total_count)?;

        Ok(PaginatedResponse::new(posts, page, total_count).map(PostDto::from))
    }

    pub async fn get_post(&self, id: i32) -> AppResult<PostDto> {
        let post = self.find_post(id).await?;
        Ok(post.into())
    }

    // --- 更新系 ---

    pub async fn create_post(
        &self,
        author: &UserClaims,
        payload: CreatePostDto,
    ) -> AppResult<PostDto> {
        payload.validate()?;

        let created = self
            .repo
            .create(author.user_id, payload.title, payload.content)
            .await?;

        info!(
            post_id = %created.id,
            author_id = %author.user_id,
            "Post created"
        );

        Ok(created.into())
    }

    /// 投稿を全置換で更新（作成者のみ）
    pub async fn update_post(
        &self,
        user: &UserClaims,
        id: i32,
        payload: UpdatePostDto,
    ) -> AppResult<PostDto> {
        let post = self.find_post(id).await?;
        Self::ensure_can_modify(&post, user)?;

        payload.validate()?;

        let updated = self
            .repo
            .update(post, payload.title, payload.content)
            .await?;

        info!(post_id = %updated.id, user_id = %user.user_id, "Post updated");

        Ok(updated.into())
    }

    /// 投稿を削除（作成者のみ）
    pub async fn delete_post(&self, user: &UserClaims, id: i32) -> AppResult<()> {
        let post = self.find_post(id).await?;
        Self::ensure_can_modify(&post, user)?;

        let result = self.repo.delete(post.id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Not found.".to_string()));
        }

        info!(post_id = %id, user_id = %user.user_id, "Post deleted");

        Ok(())
    }

    // --- ヘルパー ---

    async fn find_post(&self, id: i32) -> AppResult<post_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Not found.".to_string()))
    }

    fn ensure_can_modify(post: &post_model::Model, user: &UserClaims) -> AppResult<()> {
        if PermissionChecker::can_modify(post, user) {
            return Ok(());
        }

        warn!(
            post_id = %post.id,
            author_id = %post.author_id,
            user_id = %user.user_id,
            "Modification denied for non-author"
        );
        Err(AppError::Forbidden(PERMISSION_DENIED_MESSAGE.to_string()))
    }
}
