use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citsite::{
    api::state::AppState,
    auth::AuthEvent,
    config::Settings,
    service::ServiceContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "citsite=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!("Starting CIT website on {}", settings.bind_address());

    // Initialize database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let service_context = Arc::new(ServiceContext::new(db_pool, &settings.auth));
    let auth_service = service_context.auth_service.clone();

    // First admin account, if configured and none exists yet
    if let Some(bootstrap) = &settings.auth.bootstrap_admin {
        if !auth_service.has_admin().await? {
            let admin = auth_service
                .create_admin(&bootstrap.email, &bootstrap.password)
                .await?;
            tracing::info!("Created bootstrap admin {}", admin.email);
        }
    }
    if !auth_service.has_admin().await? {
        tracing::warn!("No admin account exists; create one with `seed admin`");
    }

    let purged = auth_service.cleanup_expired_sessions().await?;
    if purged > 0 {
        tracing::info!("Removed {} expired sessions", purged);
    }

    // Log sign-ins and sign-outs
    let mut auth_events = auth_service.subscribe();
    tokio::spawn(async move {
        loop {
            match auth_events.recv().await {
                Ok(AuthEvent::SignedIn { admin_id, email }) => {
                    tracing::info!("Admin {} ({}) signed in", email, admin_id)
                }
                Ok(AuthEvent::SignedOut { admin_id }) => {
                    tracing::info!("Admin {} signed out", admin_id)
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Auth event log skipped {} events", skipped)
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let state = AppState::new(service_context, Arc::new(settings.clone()));
    let app = citsite::build_app(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;

    tracing::info!("Server listening on {}", settings.server.base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
