// src/repository/post_repository.rs
use crate::domain::post_model::{self, ActiveModel as PostActiveModel, Entity as PostEntity};
use crate::shared::types::PageRequest;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::entity::*;
use sea_orm::{
    Condition, DbConn, DbErr, DeleteResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, Set,
};

#[derive(Debug, Clone)]
pub struct PostRepository {
    db: DbConn,
}

impl PostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<post_model::Model>, DbErr> {
        PostEntity::find_by_id(id).one(&self.db).await
    }

    /// 新しい順にページ単位で取得（総件数も返す）
    pub async fn find_page(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<post_model::Model>, u64), DbErr> {
        self.paginate(PostEntity::find(), page).await
    }

    /// タイトルまたは本文に検索語を含む投稿を取得（大文字小文字を区別しない）
    pub async fn search_page(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<(Vec<post_model::Model>, u64), DbErr> {
        if term.is_empty() {
            return self.find_page(page).await;
        }

        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        let condition = Condition::any()
            .add(
                Expr::expr(Func::lower(Expr::col(post_model::Column::Title)))
                    .like(pattern.clone()),
            )
            .add(Expr::expr(Func::lower(Expr::col(post_model::Column::Content))).like(pattern));

        self.paginate(PostEntity::find().filter(condition), page).await
    }

    async fn paginate(
        &self,
        query: Select<PostEntity>,
        page: PageRequest,
    ) -> Result<(Vec<post_model::Model>, u64), DbErr> {
        // 総件数を取得
        let total_count = query.clone().count(&self.db).await?;

        // 範囲外のページは取得しない（呼び出し側で Invalid page. にする）
        if !page.is_in_range(total_count) {
            return Ok((Vec::new(), total_count));
        }

        let posts = query
            .order_by_desc(post_model::Column::CreatedAt)
            .order_by_desc(post_model::Column::Id)
            .limit(page.page_size)
            .offset(page.offset())
            .all(&self.db)
            .await?;

        Ok((posts, total_count))
    }

    /// 著者の投稿の作成日時のみを取得（順序は保証しない）
    pub async fn find_created_at_by_author(
        &self,
        author_id: i32,
    ) -> Result<Vec<DateTime<Utc>>, DbErr> {
        PostEntity::find()
            .select_only()
            .column(post_model::Column::CreatedAt)
            .filter(post_model::Column::AuthorId.eq(author_id))
            .into_tuple::<DateTime<Utc>>()
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        author_id: i32,
        title: String,
        content: String,
    ) -> Result<post_model::Model, DbErr> {
        let new_post = PostActiveModel {
            title: Set(title),
            content: Set(content),
            author_id: Set(author_id),
            ..Default::default()
        };
        new_post.insert(&self.db).await
    }

    pub async fn update(
        &self,
        post: post_model::Model,
        title: String,
        content: String,
    ) -> Result<post_model::Model, DbErr> {
        let mut active_model: PostActiveModel = post.into();
        active_model.title = Set(title);
        active_model.content = Set(content);
        active_model.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        PostEntity::delete_by_id(id).exec(&self.db).await
    }
}

/// LIKE のワイルドカード文字をリテラルとして扱うためにエスケープする
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
