use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Extension, Form,
};
use serde::Deserialize;

use crate::{
    api::{
        middleware::auth::{CurrentUser, SessionInfo},
        state::AppState,
    },
    domain::{Event, EventCategory, EventType, EventUpdate, NewEvent},
    web::templates::{redirect_error, redirect_notice, HtmlTemplate, SelectOption},
};

use super::{failure_message, form_token, form_token_valid, CsrfForm, EXPIRED_FORM};

const PAGE: &str = "/admin/events";

#[derive(Template)]
#[template(path = "admin/events.html")]
pub struct AdminEventsTemplate {
    pub admin_email: String,
    pub csrf_token: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub events: Vec<AdminEventInfo>,
    pub form: EventFormView,
}

pub struct AdminEventInfo {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub attendees: Option<u32>,
    pub event_type: &'static str,
    pub category: &'static str,
    pub color: &'static str,
}

pub struct EventFormView {
    pub action: String,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub editing: bool,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub attendees: String,
    pub types: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
}

impl EventFormView {
    fn new_event() -> Self {
        Self {
            action: PAGE.to_string(),
            heading: "New Event",
            submit_label: "Create Event",
            editing: false,
            title: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            description: String::new(),
            attendees: String::new(),
            types: type_options(EventType::default()),
            categories: category_options(EventCategory::default()),
        }
    }

    fn edit(event: &Event) -> Self {
        Self {
            action: format!("{}/{}", PAGE, event.id),
            heading: "Edit Event",
            submit_label: "Update Event",
            editing: true,
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            attendees: event.attendees.map(|n| n.to_string()).unwrap_or_default(),
            types: type_options(event.event_type),
            categories: category_options(event.category),
        }
    }
}

fn type_options(selected: EventType) -> Vec<SelectOption> {
    EventType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
            selected: *t == selected,
        })
        .collect()
}

fn category_options(selected: EventCategory) -> Vec<SelectOption> {
    EventCategory::ALL
        .iter()
        .map(|c| SelectOption {
            value: c.as_str(),
            label: c.label(),
            selected: *c == selected,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct AdminEventsQuery {
    pub edit: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub csrf_token: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    /// Blank means no expected attendee count.
    #[serde(default)]
    pub attendees: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
}

impl EventForm {
    fn attendees(&self) -> Result<Option<u32>, String> {
        let raw = self.attendees.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<u32>()
            .map(Some)
            .map_err(|_| "Expected attendees must be a whole number".to_string())
    }
}

// GET /admin/events
pub async fn admin_events_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Extension(session_info): Extension<SessionInfo>,
    Query(query): Query<AdminEventsQuery>,
) -> impl IntoResponse {
    let csrf_token = form_token(&state, &session_info).await;
    let mut error = query.error;

    let events = match state.service_context.event_service.get_all().await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Error loading events: {}", e);
            error = Some("Failed to load events".to_string());
            Vec::new()
        }
    };

    let form = query
        .edit
        .as_deref()
        .and_then(|id| events.iter().find(|e| e.id == id))
        .map(EventFormView::edit)
        .unwrap_or_else(EventFormView::new_event);

    let events = events
        .into_iter()
        .map(|e| AdminEventInfo {
            event_type: e.event_type.as_str(),
            category: e.category.as_str(),
            color: e.category.color(),
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            location: e.location,
            description: e.description,
            attendees: e.attendees,
        })
        .collect();

    HtmlTemplate(AdminEventsTemplate {
        admin_email: current_user.admin.email,
        csrf_token,
        notice: query.notice,
        error,
        events,
        form,
    })
}

// POST /admin/events
pub async fn admin_create_event(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Form(form): Form<EventForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    let attendees = match form.attendees() {
        Ok(attendees) => attendees,
        Err(msg) => return redirect_error(PAGE, &msg).into_response(),
    };

    let event = NewEvent {
        title: form.title,
        date: form.date,
        time: form.time,
        location: form.location,
        description: form.description,
        attendees,
        event_type: form.event_type,
        category: form.category,
    };

    match state.service_context.event_service.create(event).await {
        Ok(_) => redirect_notice(PAGE, "Event created!").into_response(),
        Err(e) => {
            tracing::error!("Error saving event: {}", e);
            redirect_error(PAGE, &failure_message("save event", &e)).into_response()
        }
    }
}

// POST /admin/events/:id
pub async fn admin_update_event(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<EventForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    let attendees = match form.attendees() {
        Ok(attendees) => attendees,
        Err(msg) => return redirect_error(PAGE, &msg).into_response(),
    };

    // A blank attendee field clears the stored count.
    let update = EventUpdate {
        title: Some(form.title),
        date: Some(form.date),
        time: Some(form.time),
        location: Some(form.location),
        description: Some(form.description),
        attendees: Some(attendees),
        event_type: Some(form.event_type),
        category: Some(form.category),
    };

    match state.service_context.event_service.update(&id, update).await {
        Ok(()) => redirect_notice(PAGE, "Event updated!").into_response(),
        Err(e) => {
            tracing::error!("Error saving event {}: {}", id, e);
            redirect_error(PAGE, &failure_message("save event", &e)).into_response()
        }
    }
}

// POST /admin/events/:id/delete
pub async fn admin_delete_event(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    match state.service_context.event_service.delete(&id).await {
        Ok(()) => redirect_notice(PAGE, "Event deleted!").into_response(),
        Err(e) => {
            tracing::error!("Error deleting event {}: {}", id, e);
            redirect_error(PAGE, "Failed to delete event").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(attendees: &str) -> EventForm {
        EventForm {
            csrf_token: String::new(),
            title: "Hack Night".to_string(),
            date: "March 3, 2025".to_string(),
            time: "6:00 PM".to_string(),
            location: "CIT Lab 2".to_string(),
            description: "Build something overnight".to_string(),
            attendees: attendees.to_string(),
            event_type: EventType::Upcoming,
            category: EventCategory::Competition,
        }
    }

    #[test]
    fn blank_attendees_means_none() {
        assert_eq!(form("  ").attendees(), Ok(None));
        assert_eq!(form("120").attendees(), Ok(Some(120)));
        assert!(form("lots").attendees().is_err());
    }
}
