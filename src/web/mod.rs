pub mod admin;
pub mod content;
pub mod pages;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

pub fn create_web_routes(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/programs", get(pages::programs_page))
        .route("/announcements", get(pages::announcements_page))
        .route("/hall-of-fame", get(pages::hall_of_fame_page))
        .route("/events", get(pages::events_page))
        .route(
            "/events/:id/register",
            get(pages::register_page).post(pages::submit_registration),
        )
        .route("/contacts", get(pages::contacts_page).post(pages::submit_contact))

        // Admin sign-in (unguarded)
        .route(
            "/admin/login",
            get(admin::login::login_page).post(admin::login::login_handler),
        )
        .route("/admin/logout", post(admin::login::logout_handler))

        // Admin area
        .nest("/admin", admin::create_admin_routes(state.clone()))

        .fallback(|| async { templates::not_found("The page you are looking for does not exist.") })
        .with_state(state)
}
