// tests/common/app_helper.rs

use axum::Router;
use blog_backend::{
    api::{create_router, AppState},
    config::AppConfig,
    service::statistics_service::{AuthoredPostReader, StatisticsService, UserLookup},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::common;

/// データベース付きアプリのセットアップ
pub async fn setup_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;
    let app_state = AppState::new(db.connection.clone(), AppConfig::for_testing())
        .expect("build app state");

    (create_router(app_state), db)
}

/// DB接続なしで統計の取得元だけを差し替えたアプリ
pub fn setup_app_with_statistics(
    users: Arc<dyn UserLookup>,
    posts: Arc<dyn AuthoredPostReader>,
) -> Router {
    common::init_test_env();

    let app_state = AppState::new(DatabaseConnection::Disconnected, AppConfig::for_testing())
        .expect("build app state")
        .with_statistics_service(Arc::new(StatisticsService::with_sources(users, posts)));

    create_router(app_state)
}
