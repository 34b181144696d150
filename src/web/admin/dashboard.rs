use askama::Template;
use axum::{extract::State, response::IntoResponse, Extension};

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::ContactStatus,
    web::templates::HtmlTemplate,
};

pub struct DashboardCard {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub action: &'static str,
    pub count: Option<usize>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub error: Option<String>,
    pub cards: Vec<DashboardCard>,
    pub new_messages: usize,
}

// GET /admin/dashboard
pub async fn admin_dashboard_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> impl IntoResponse {
    let services = &state.service_context;

    let announcements = services.announcement_service.get_all().await;
    let events = services.event_service.get_all().await;
    let messages = services.contact_service.get_all().await;
    let registrations = services.registration_service.get_all().await;

    let failed = [
        announcements.as_ref().err(),
        events.as_ref().err(),
        messages.as_ref().err(),
        registrations.as_ref().err(),
    ];
    let mut error = None;
    for e in failed.into_iter().flatten() {
        tracing::error!("Error loading dashboard counts: {}", e);
        error = Some("Some dashboard figures could not be loaded.".to_string());
    }

    let new_messages = messages
        .as_ref()
        .map(|m| m.iter().filter(|m| m.status == ContactStatus::New).count())
        .unwrap_or(0);

    let cards = vec![
        DashboardCard {
            title: "Announcements",
            description: "Create, edit, and manage announcements",
            link: "/admin/announcements",
            action: "Manage Announcements",
            count: announcements.as_ref().ok().map(Vec::len),
        },
        DashboardCard {
            title: "Events",
            description: "Add and update upcoming events",
            link: "/admin/events",
            action: "Manage Events",
            count: events.as_ref().ok().map(Vec::len),
        },
        DashboardCard {
            title: "Contact Messages",
            description: "View and respond to contact inquiries",
            link: "/admin/contacts",
            action: "View Messages",
            count: messages.as_ref().ok().map(Vec::len),
        },
        DashboardCard {
            title: "Event Registrations",
            description: "View all event registrations",
            link: "/admin/registrations",
            action: "View Registrations",
            count: registrations.as_ref().ok().map(Vec::len),
        },
    ];

    HtmlTemplate(DashboardTemplate {
        admin_email: current_user.admin.email,
        error,
        cards,
        new_messages,
    })
}
