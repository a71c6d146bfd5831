// src/api/mod.rs
use crate::api::handlers::{auth_handler, post_handler, statistics_handler, system_handler};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::AppError;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, jwt_auth_middleware, AuthMiddlewareConfig};
use crate::repository::user_repository::UserRepository;
use crate::service::{
    auth_service::AuthService, post_service::PostService, statistics_service::StatisticsService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordManager, PasswordPolicy};
use axum::{middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
    pub statistics_service: Arc<StatisticsService>,
    pub jwt_manager: Arc<JwtManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 設定とDB接続から全サービスを組み立てる
    pub fn new(db_pool: DbPool, config: AppConfig) -> Result<Self, AppError> {
        let jwt_manager = Arc::new(
            JwtManager::new(config.jwt.clone())
                .map_err(|e| AppError::InternalServerError(e.to_string()))?,
        );
        let password_manager = Arc::new(
            PasswordManager::new(config.argon2.clone(), PasswordPolicy::default())
                .map_err(|e| AppError::InternalServerError(e.to_string()))?,
        );

        let auth_service = Arc::new(AuthService::new(
            Arc::new(UserRepository::new(db_pool.clone())),
            password_manager,
            jwt_manager.clone(),
        ));
        let post_service = Arc::new(PostService::new(db_pool.clone()));
        let statistics_service = Arc::new(StatisticsService::new(db_pool));

        Ok(Self {
            auth_service,
            post_service,
            statistics_service,
            jwt_manager,
            config: Arc::new(config),
        })
    }

    /// 統計サービスを差し替える
    pub fn with_statistics_service(mut self, statistics_service: Arc<StatisticsService>) -> Self {
        self.statistics_service = statistics_service;
        self
    }
}

/// 全ルーターとミドルウェアを統合
pub fn create_router(app_state: AppState) -> Router {
    let config = app_state.config.clone();
    let auth_middleware_config = AuthMiddlewareConfig::new(app_state.jwt_manager.clone());

    Router::new()
        .merge(system_handler::system_router())
        .merge(auth_handler::auth_router(app_state.clone()))
        .merge(post_handler::post_router(app_state.clone()))
        .merge(statistics_handler::statistics_router(app_state))
        .layer(axum_middleware::from_fn_with_state(
            auth_middleware_config,
            jwt_auth_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit))
        .layer(cors_layer(&config.cors_allowed_origins))
}
