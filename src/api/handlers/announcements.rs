use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{handlers::Created, state::AppState},
    domain::{Announcement, AnnouncementUpdate, NewAnnouncement},
    error::Result,
};

#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = "announcements",
    responses((status = 200, description = "All announcements, newest first", body = Vec<Announcement>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_service.get_all().await?;
    Ok(Json(announcements))
}

#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = "announcements",
    request_body = NewAnnouncement,
    responses(
        (status = 201, description = "Announcement created", body = Created),
        (status = 422, description = "Invalid announcement")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewAnnouncement>,
) -> Result<(StatusCode, Json<Created>)> {
    let id = state.service_context.announcement_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Announcement id")),
    request_body = AnnouncementUpdate,
    responses(
        (status = 204, description = "Announcement updated"),
        (status = 404, description = "No such announcement")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AnnouncementUpdate>,
) -> Result<StatusCode> {
    state.service_context.announcement_service.update(&id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Announcement id")),
    responses((status = 204, description = "Announcement deleted"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.announcement_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
