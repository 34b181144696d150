mod announcements;
mod contacts;
mod dashboard;
mod events;
pub mod login;
mod registrations;

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    api::{middleware::auth::SessionInfo, state::AppState},
    error::AppError,
};

pub const DASHBOARD_PATH: &str = "/admin/dashboard";

pub fn create_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(DASHBOARD_PATH) }))
        .route("/dashboard", get(dashboard::admin_dashboard_page))
        // Announcements
        .route(
            "/announcements",
            get(announcements::admin_announcements_page)
                .post(announcements::admin_create_announcement),
        )
        .route("/announcements/:id", post(announcements::admin_update_announcement))
        .route("/announcements/:id/delete", post(announcements::admin_delete_announcement))
        // Events
        .route(
            "/events",
            get(events::admin_events_page).post(events::admin_create_event),
        )
        .route("/events/:id", post(events::admin_update_event))
        .route("/events/:id/delete", post(events::admin_delete_event))
        // Contact messages
        .route("/contacts", get(contacts::admin_contacts_page))
        .route("/contacts/:id/status", post(contacts::admin_update_contact_status))
        .route("/contacts/:id/delete", post(contacts::admin_delete_contact))
        // Registrations
        .route("/registrations", get(registrations::admin_registrations_page))
        .route("/registrations/:id/delete", post(registrations::admin_delete_registration))
        // Signed-out visitors are sent to the login page
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::api::middleware::auth::require_auth_redirect,
        ))
}

/// Body of the delete buttons: nothing but the form token.
#[derive(Debug, Deserialize)]
pub struct CsrfForm {
    pub csrf_token: String,
}

/// Token embedded in the page's forms. An empty token simply makes the next
/// post fail the check, so a generation error is only logged.
pub(crate) async fn form_token(state: &AppState, session: &SessionInfo) -> String {
    match state
        .service_context
        .csrf_service
        .generate_token(&session.session_id)
        .await
    {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to generate CSRF token: {}", e);
            String::new()
        }
    }
}

pub(crate) async fn form_token_valid(state: &AppState, session: &SessionInfo, token: &str) -> bool {
    state
        .service_context
        .csrf_service
        .verify(&session.session_id, token)
        .await
        .is_ok()
}

pub(crate) const EXPIRED_FORM: &str = "Your form has expired. Please try again.";

/// Banner text for a failed mutation. Validation problems are shown as-is;
/// anything else stays generic.
pub(crate) fn failure_message(action: &str, e: &AppError) -> String {
    match e {
        AppError::Validation(msg) | AppError::BadRequest(msg) => {
            format!("Failed to {}: {}", action, msg)
        }
        AppError::NotFound(_) => format!("Failed to {}: it no longer exists", action),
        _ => format!("Failed to {}", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_hides_database_detail() {
        let e = AppError::Database("disk I/O error".to_string());
        assert_eq!(failure_message("save event", &e), "Failed to save event");

        let e = AppError::Validation("Title is required".to_string());
        assert_eq!(
            failure_message("save event", &e),
            "Failed to save event: Title is required"
        );
    }
}
