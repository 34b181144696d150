use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{handlers::Created, state::AppState},
    domain::{Event, EventUpdate, NewEvent, RegistrationForm},
    error::{AppError, Result},
};

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses((status = 200, description = "All events ordered by date", body = Vec<Event>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    let events = state.service_context.event_service.get_all().await?;
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = NewEvent,
    responses(
        (status = 201, description = "Event created", body = Created),
        (status = 422, description = "Invalid event")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewEvent>,
) -> Result<(StatusCode, Json<Created>)> {
    let id = state.service_context.event_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event id")),
    request_body = EventUpdate,
    responses(
        (status = 204, description = "Event updated"),
        (status = 404, description = "No such event")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EventUpdate>,
) -> Result<StatusCode> {
    state.service_context.event_service.update(&id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = String, Path, description = "Event id")),
    responses((status = 204, description = "Event deleted; its registrations are kept"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.event_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/registrations",
    tag = "events",
    params(("id" = String, Path, description = "Event id")),
    request_body = RegistrationForm,
    responses(
        (status = 201, description = "Registered", body = Created),
        (status = 404, description = "No such event"),
        (status = 422, description = "Invalid registration")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<Created>)> {
    let event = state.service_context.event_service
        .get(&id)
        .await?
        .ok_or(AppError::NotFound("Event not found".to_string()))?;

    let id = state.service_context.registration_service
        .register(&event, form)
        .await?;

    Ok((StatusCode::CREATED, Json(Created { id })))
}
