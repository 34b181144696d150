use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{handlers::Created, state::AppState},
    domain::{ContactMessage, ContactMessageUpdate, NewContactMessage},
    error::Result,
};

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = NewContactMessage,
    responses(
        (status = 201, description = "Message received", body = Created),
        (status = 422, description = "Invalid message")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<Created>)> {
    let id = state.service_context.contact_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses((status = 200, description = "All messages, newest first", body = Vec<ContactMessage>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>> {
    let messages = state.service_context.contact_service.get_all().await?;
    Ok(Json(messages))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Message id")),
    request_body = ContactMessageUpdate,
    responses(
        (status = 204, description = "Message updated"),
        (status = 404, description = "No such message")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ContactMessageUpdate>,
) -> Result<StatusCode> {
    state.service_context.contact_service.update(&id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Message id")),
    responses((status = 204, description = "Message deleted"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.contact_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
