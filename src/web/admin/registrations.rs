use std::collections::HashSet;

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
    domain::EventRegistration,
    web::templates::{redirect_error, redirect_notice, HtmlTemplate},
};

use super::{form_token, form_token_valid, CsrfForm, EXPIRED_FORM};

const PAGE: &str = "/admin/registrations";

#[derive(Template)]
#[template(path = "admin/registrations.html")]
pub struct AdminRegistrationsTemplate {
    pub admin_email: String,
    pub csrf_token: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub grouped: bool,
    pub toggle_link: String,
    pub toggle_label: &'static str,
    pub view: &'static str,
    pub total: usize,
    pub event_options: Vec<EventOption>,
    pub groups: Vec<RegistrationGroup>,
    pub registrations: Vec<AdminRegistrationInfo>,
}

pub struct EventOption {
    pub id: String,
    pub title: String,
    pub selected: bool,
}

pub struct RegistrationGroup {
    pub event_title: String,
    pub count_label: String,
    pub orphaned: bool,
    pub registrations: Vec<AdminRegistrationInfo>,
}

pub struct AdminRegistrationInfo {
    pub id: String,
    pub event_title: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub registered: String,
    pub orphaned: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminRegistrationsQuery {
    /// `grouped` (default) or `all`.
    pub view: Option<String>,
    pub event_id: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 registration".to_string()
    } else {
        format!("{} registrations", n)
    }
}

/// Groups by the stored event title, keeping the order in which each title
/// first appears.
pub fn group_by_event_title(registrations: Vec<AdminRegistrationInfo>) -> Vec<RegistrationGroup> {
    let mut groups: Vec<RegistrationGroup> = Vec::new();
    for registration in registrations {
        match groups
            .iter_mut()
            .find(|g| g.event_title == registration.event_title)
        {
            Some(group) => {
                group.orphaned &= registration.orphaned;
                group.registrations.push(registration);
            }
            None => groups.push(RegistrationGroup {
                event_title: registration.event_title.clone(),
                count_label: String::new(),
                orphaned: registration.orphaned,
                registrations: vec![registration],
            }),
        }
    }
    for group in &mut groups {
        group.count_label = count_label(group.registrations.len());
    }
    groups
}

// GET /admin/registrations
pub async fn admin_registrations_page(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Extension(session_info): Extension<SessionInfo>,
    Query(query): Query<AdminRegistrationsQuery>,
) -> impl IntoResponse {
    let csrf_token = form_token(&state, &session_info).await;
    let services = &state.service_context;
    let mut error = query.error;

    let grouped = query.view.as_deref() != Some("all");
    let event_id = query.event_id.unwrap_or_default();

    let loaded = if event_id.is_empty() {
        services.registration_service.get_all().await
    } else {
        services.registration_service.get_by_event(&event_id).await
    };
    let registrations: Vec<EventRegistration> = match loaded {
        Ok(registrations) => registrations,
        Err(e) => {
            tracing::error!("Error loading registrations: {}", e);
            error = Some("Failed to load registrations".to_string());
            Vec::new()
        }
    };

    // Registrations outlive their event; those whose event is gone are flagged.
    let events = match services.event_service.get_all().await {
        Ok(events) => Some(events),
        Err(e) => {
            tracing::error!("Error loading events for registration filter: {}", e);
            None
        }
    };
    let live_ids: Option<HashSet<&str>> = events
        .as_ref()
        .map(|events| events.iter().map(|e| e.id.as_str()).collect());

    let event_options = events
        .iter()
        .flatten()
        .map(|e| EventOption {
            id: e.id.clone(),
            title: e.title.clone(),
            selected: e.id == event_id,
        })
        .collect();

    let total = registrations.len();
    let rows: Vec<AdminRegistrationInfo> = registrations
        .into_iter()
        .map(|r| AdminRegistrationInfo {
            orphaned: live_ids
                .as_ref()
                .is_some_and(|ids| !ids.contains(r.event_id.as_str())),
            registered: r.created_at.format("%b %-d, %Y %H:%M").to_string(),
            id: r.id,
            event_title: r.event_title,
            name: r.name,
            email: r.email,
            phone: r.phone,
        })
        .collect();

    let (groups, registrations) = if grouped {
        (group_by_event_title(rows), Vec::new())
    } else {
        (Vec::new(), rows)
    };

    let filter = if event_id.is_empty() {
        String::new()
    } else {
        format!("&event_id={}", urlencoding::encode(&event_id))
    };
    let (toggle_link, toggle_label, view) = if grouped {
        (format!("{}?view=all{}", PAGE, filter), "Show All", "grouped")
    } else {
        (format!("{}?view=grouped{}", PAGE, filter), "Group by Event", "all")
    };

    HtmlTemplate(AdminRegistrationsTemplate {
        admin_email: current_user.admin.email,
        csrf_token,
        notice: query.notice,
        error,
        grouped,
        toggle_link,
        toggle_label,
        view,
        total,
        event_options,
        groups,
        registrations,
    })
}

// POST /admin/registrations/:id/delete
pub async fn admin_delete_registration(
    State(state): State<AppState>,
    Extension(session_info): Extension<SessionInfo>,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> Response {
    if !form_token_valid(&state, &session_info, &form.csrf_token).await {
        return redirect_error(PAGE, EXPIRED_FORM).into_response();
    }

    match state.service_context.registration_service.delete(&id).await {
        Ok(()) => redirect_notice(PAGE, "Registration deleted!").into_response(),
        Err(e) => {
            tracing::error!("Error deleting registration {}: {}", id, e);
            redirect_error(PAGE, "Failed to delete registration").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, title: &str, orphaned: bool) -> AdminRegistrationInfo {
        AdminRegistrationInfo {
            id: id.to_string(),
            event_title: title.to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            registered: String::new(),
            orphaned,
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_by_event_title(vec![
            row("r1", "Hack Night", false),
            row("r2", "Career Fair", true),
            row("r3", "Hack Night", false),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].event_title, "Hack Night");
        assert_eq!(groups[0].count_label, "2 registrations");
        assert!(!groups[0].orphaned);
        assert_eq!(groups[1].event_title, "Career Fair");
        assert_eq!(groups[1].count_label, "1 registration");
        assert!(groups[1].orphaned);
    }
}
