use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::state::AppState,
    domain::{EventRegistration, RegistrationUpdate},
    error::Result,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRegistrationsQuery {
    /// Only registrations for this event.
    pub event_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    tag = "registrations",
    params(ListRegistrationsQuery),
    responses((status = 200, description = "Registrations, newest first", body = Vec<EventRegistration>))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRegistrationsQuery>,
) -> Result<Json<Vec<EventRegistration>>> {
    let service = &state.service_context.registration_service;
    let registrations = match params.event_id.as_deref().filter(|id| !id.is_empty()) {
        Some(event_id) => service.get_by_event(event_id).await?,
        None => service.get_all().await?,
    };
    Ok(Json(registrations))
}

#[utoipa::path(
    put,
    path = "/api/registrations/{id}",
    tag = "registrations",
    params(("id" = String, Path, description = "Registration id")),
    request_body = RegistrationUpdate,
    responses(
        (status = 204, description = "Registration updated"),
        (status = 404, description = "No such registration")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RegistrationUpdate>,
) -> Result<StatusCode> {
    state.service_context.registration_service.update(&id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    tag = "registrations",
    params(("id" = String, Path, description = "Registration id")),
    responses((status = 204, description = "Registration deleted"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.registration_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
