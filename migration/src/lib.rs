// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 認証関連マイグレーション
mod m20250801_000001_create_users_table;

// 投稿関連マイグレーション（usersテーブルに依存）
mod m20250801_000002_create_posts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250801_000001_create_users_table::Migration),
            // 2. 依存テーブル作成（usersテーブルへの外部キー）
            Box::new(m20250801_000002_create_posts_table::Migration),
        ]
    }
}
