use axum::{http::StatusCode, Json, response::IntoResponse};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

#[utoipa::path(
    get,
    path = "/api",
    tag = "meta",
    responses((status = 200, description = "API information", body = ApiInfo))
)]
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfo {
        name: "CIT Website API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Announcements, events, contact messages and event registrations".to_string(),
        status: "operational".to_string(),
    })
}
