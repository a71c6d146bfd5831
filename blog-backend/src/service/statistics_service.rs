// src/service/statistics_service.rs

use crate::db::DbPool;
use crate::domain::post_statistics::{self, StatisticsReport, SubjectUser};
use crate::error::{AppError, AppResult};
use crate::repository::post_repository::PostRepository;
use crate::repository::user_repository::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// 集計対象ユーザーを解決する
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_user(&self, user_id: i32) -> AppResult<Option<SubjectUser>>;
}

/// 著者の投稿作成日時を取得する
#[async_trait]
pub trait AuthoredPostReader: Send + Sync {
    async fn post_timestamps_by_author(&self, author_id: i32) -> AppResult<Vec<DateTime<Utc>>>;
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn find_user(&self, user_id: i32) -> AppResult<Option<SubjectUser>> {
        let user = self.find_by_id(user_id).await?;
        Ok(user.map(|u| SubjectUser::new(u.id, u.username)))
    }
}

#[async_trait]
impl AuthoredPostReader for PostRepository {
    async fn post_timestamps_by_author(&self, author_id: i32) -> AppResult<Vec<DateTime<Utc>>> {
        Ok(self.find_created_at_by_author(author_id).await?)
    }
}

/// ユーザー別の月次投稿統計
pub struct StatisticsService {
    users: Arc<dyn UserLookup>,
    posts: Arc<dyn AuthoredPostReader>,
}

impl StatisticsService {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_sources(
            Arc::new(UserRepository::new(db_pool.clone())),
            Arc::new(PostRepository::new(db_pool)),
        )
    }

    pub fn with_sources(users: Arc<dyn UserLookup>, posts: Arc<dyn AuthoredPostReader>) -> Self {
        Self { users, posts }
    }

    /// ユーザーの投稿を月単位で集計する
    ///
    /// ユーザーが存在しない場合は集計を行わずに `NotFound` を返す。
    pub async fn user_statistics(&self, user_id: i32) -> AppResult<StatisticsReport> {
        let Some(user) = self.users.find_user(user_id).await? else {
            warn!(user_id = %user_id, "Statistics requested for unknown user");
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let timestamps = self.posts.post_timestamps_by_author(user.user_id).await?;
        let report = post_statistics::compute(user, timestamps);

        info!(
            user_id = %report.user_id,
            total_posts = %report.total_posts,
            total_months = %report.total_months,
            "User post statistics computed"
        );

        Ok(report)
    }
}
