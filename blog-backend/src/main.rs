// src/main.rs
use blog_backend::api::{create_router, AppState};
use blog_backend::config::AppConfig;
use blog_backend::{db, logging};
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    tracing::info!("Starting Blog Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = db::connect(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // 未適用のマイグレーションを適用
    Migrator::up(&db_pool, None).await?;
    tracing::info!("Database migrations applied.");

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config)?;
    let app_router = create_router(app_state);

    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
