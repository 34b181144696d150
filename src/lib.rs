pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod web;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::api::state::AppState;

/// The whole site: JSON API, HTML pages and static assets.
pub fn build_app(state: AppState) -> Router {
    let static_dir = state.settings.server.static_dir.clone();

    api::create_app(state.clone())
        .merge(web::create_web_routes(state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
