use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Form,
};

use crate::{
    api::state::AppState,
    domain::{Announcement, Event, NewContactMessage, RegistrationForm},
    web::{
        content::{self, Card, ContactInfo, CurriculumYear, Project},
        templates::{not_found, redirect_error, redirect_notice, Flash, HtmlTemplate},
    },
};

/// How many announcements the home page previews.
const HOME_ANNOUNCEMENTS: usize = 3;

pub struct AnnouncementCard {
    pub title: String,
    pub date: String,
    pub paragraphs: Vec<String>,
    pub type_class: &'static str,
    pub type_label: &'static str,
}

impl From<Announcement> for AnnouncementCard {
    fn from(a: Announcement) -> Self {
        Self {
            title: a.title,
            date: a.date,
            paragraphs: a.content,
            type_class: a.announcement_type.as_str(),
            type_label: a.announcement_type.label(),
        }
    }
}

pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub attendees: Option<u32>,
    pub category: &'static str,
    pub color: &'static str,
}

impl From<Event> for EventCard {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            location: e.location,
            description: e.description,
            attendees: e.attendees,
            category: e.category.as_str(),
            color: e.category.color(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub announcements: Vec<AnnouncementCard>,
    pub highlights: &'static [Card],
    pub why_choose: &'static [Card],
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub college_name: &'static str,
    pub university_name: &'static str,
    pub outcomes: &'static [Card],
}

#[derive(Template)]
#[template(path = "pages/programs.html")]
pub struct ProgramsTemplate {
    pub specializations: &'static [Card],
    pub curriculum: &'static [CurriculumYear],
    pub careers: &'static [Card],
}

#[derive(Template)]
#[template(path = "pages/hall_of_fame.html")]
pub struct HallOfFameTemplate {
    pub projects: &'static [Project],
    pub award_images: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "pages/announcements.html")]
pub struct AnnouncementsTemplate {
    pub announcements: Vec<AnnouncementCard>,
}

#[derive(Template)]
#[template(path = "pages/events.html")]
pub struct EventsTemplate {
    pub flash: Flash,
    pub events: Vec<EventCard>,
}

#[derive(Template)]
#[template(path = "pages/register.html")]
pub struct RegisterTemplate {
    pub flash: Flash,
    pub event: EventCard,
}

#[derive(Template)]
#[template(path = "pages/contacts.html")]
pub struct ContactsTemplate {
    pub flash: Flash,
    pub contact_info: &'static [ContactInfo],
}

// Public listings degrade to empty content when the store is unavailable.
async fn load_or_empty<T, F>(what: &str, load: F) -> Vec<T>
where
    F: std::future::Future<Output = crate::error::Result<Vec<T>>>,
{
    match load.await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Error fetching {}: {}", what, e);
            Vec::new()
        }
    }
}

// GET /
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let announcements = load_or_empty(
        "announcements",
        state
            .service_context
            .announcement_service
            .recent(HOME_ANNOUNCEMENTS),
    )
    .await;

    HtmlTemplate(HomeTemplate {
        announcements: announcements.into_iter().map(Into::into).collect(),
        highlights: content::HIGHLIGHTS,
        why_choose: content::WHY_CHOOSE,
    })
}

// GET /about
pub async fn about_page() -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        college_name: content::COLLEGE_NAME,
        university_name: content::UNIVERSITY_NAME,
        outcomes: content::LEARNING_OUTCOMES,
    })
}

// GET /programs
pub async fn programs_page() -> impl IntoResponse {
    HtmlTemplate(ProgramsTemplate {
        specializations: content::SPECIALIZATIONS,
        curriculum: content::CURRICULUM,
        careers: content::CAREERS,
    })
}

// GET /hall-of-fame
pub async fn hall_of_fame_page() -> impl IntoResponse {
    HtmlTemplate(HallOfFameTemplate {
        projects: content::FEATURED_PROJECTS,
        award_images: content::AWARD_IMAGES,
    })
}

// GET /announcements
pub async fn announcements_page(State(state): State<AppState>) -> impl IntoResponse {
    let announcements = load_or_empty(
        "announcements",
        state.service_context.announcement_service.get_all(),
    )
    .await;

    HtmlTemplate(AnnouncementsTemplate {
        announcements: announcements.into_iter().map(Into::into).collect(),
    })
}

// GET /events
pub async fn events_page(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> impl IntoResponse {
    let events = load_or_empty("events", state.service_context.event_service.get_all()).await;

    HtmlTemplate(EventsTemplate {
        flash,
        events: events.into_iter().map(Into::into).collect(),
    })
}

async fn find_event(state: &AppState, id: &str) -> Option<Event> {
    match state.service_context.event_service.get(id).await {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("Error fetching event {}: {}", id, e);
            None
        }
    }
}

// GET /events/:id/register
pub async fn register_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(flash): Query<Flash>,
) -> Response {
    match find_event(&state, &id).await {
        Some(event) => HtmlTemplate(RegisterTemplate {
            flash,
            event: event.into(),
        })
        .into_response(),
        None => not_found("That event could not be found."),
    }
}

// POST /events/:id/register
pub async fn submit_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    let Some(event) = find_event(&state, &id).await else {
        return not_found("That event could not be found.");
    };

    match state
        .service_context
        .registration_service
        .register(&event, form)
        .await
    {
        Ok(_) => redirect_notice(
            "/events",
            &format!("Registration successful! You are registered for {}.", event.title),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Error submitting registration for event {}: {}", id, e);
            redirect_error(
                &format!("/events/{}/register", id),
                "Registration failed. Please check your details and try again.",
            )
            .into_response()
        }
    }
}

// GET /contacts
pub async fn contacts_page(Query(flash): Query<Flash>) -> impl IntoResponse {
    HtmlTemplate(ContactsTemplate {
        flash,
        contact_info: content::CONTACT_INFO,
    })
}

// POST /contacts
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(message): Form<NewContactMessage>,
) -> Response {
    match state.service_context.contact_service.create(message).await {
        Ok(_) => redirect_notice(
            "/contacts",
            "Message sent successfully! We will get back to you soon.",
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Error submitting contact form: {}", e);
            redirect_error("/contacts", "Failed to send message. Please try again.")
                .into_response()
        }
    }
}
