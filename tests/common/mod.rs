#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use citsite::{api::state::AppState, config::Settings, service::ServiceContext};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub const ADMIN_EMAIL: &str = "admin@cit.edu.ph";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// In-memory database with migrations applied. A single connection keeps
/// every query on the same database.
pub async fn test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

pub async fn test_services() -> anyhow::Result<Arc<ServiceContext>> {
    let pool = test_pool().await?;
    let settings = Settings::default();
    Ok(Arc::new(ServiceContext::new(pool, &settings.auth)))
}

/// The full router over a fresh database, plus the services behind it.
pub async fn test_app() -> anyhow::Result<(Router, Arc<ServiceContext>)> {
    let services = test_services().await?;
    let state = AppState::new(services.clone(), Arc::new(Settings::default()));
    Ok((citsite::build_app(state), services))
}
