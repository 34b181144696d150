pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{
    AdminUser, Announcement, AnnouncementType, AnnouncementUpdate, ContactMessage,
    ContactMessageUpdate, ContactStatus, Event, EventCategory, EventRegistration, EventType,
    EventUpdate, NewAnnouncement, NewContactMessage, NewEvent, RegistrationForm,
    RegistrationUpdate,
};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(title = "CIT Website API", description = "Public content and admin management endpoints"),
    paths(
        handlers::root::health_check,
        handlers::root::api_info,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,
        handlers::announcements::list,
        handlers::announcements::create,
        handlers::announcements::update,
        handlers::announcements::delete,
        handlers::events::list,
        handlers::events::create,
        handlers::events::update,
        handlers::events::delete,
        handlers::events::register,
        handlers::contacts::create,
        handlers::contacts::list,
        handlers::contacts::update,
        handlers::contacts::delete,
        handlers::registrations::list,
        handlers::registrations::update,
        handlers::registrations::delete,
    ),
    components(schemas(
        AdminUser, Announcement, AnnouncementType, AnnouncementUpdate, NewAnnouncement,
        Event, EventType, EventCategory, EventUpdate, NewEvent,
        ContactMessage, ContactStatus, ContactMessageUpdate, NewContactMessage,
        EventRegistration, RegistrationForm, RegistrationUpdate,
        handlers::Created, handlers::auth::LoginRequest, handlers::auth::LoginResponse,
    )),
    tags(
        (name = "announcements", description = "College announcements"),
        (name = "events", description = "Events and public registration"),
        (name = "contacts", description = "Contact form messages"),
        (name = "registrations", description = "Event registrations"),
        (name = "auth", description = "Administrator sessions"),
    )
)]
pub struct ApiDoc;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))

        // JSON API
        .nest("/api", api_routes(state.clone()))

        // OpenAPI document + Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))

        .with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes(state.clone()))
        .nest("/announcements", announcement_routes(state.clone()))
        .nest("/events", event_routes(state.clone()))
        .nest("/contacts", contact_routes(state.clone()))
        .nest("/registrations", registration_routes(state))
}

fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .merge(
            Router::new()
                .route("/me", get(handlers::auth::me))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_auth,
                )),
        )
}

fn announcement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public listing
        .route("/", get(handlers::announcements::list))
        // Admin mutations
        .merge(
            Router::new()
                .route("/", post(handlers::announcements::create))
                .route(
                    "/:id",
                    put(handlers::announcements::update).delete(handlers::announcements::delete),
                )
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_auth,
                )),
        )
}

fn event_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public listing and registration
        .route("/", get(handlers::events::list))
        .route("/:id/registrations", post(handlers::events::register))
        // Admin mutations
        .merge(
            Router::new()
                .route("/", post(handlers::events::create))
                .route(
                    "/:id",
                    put(handlers::events::update).delete(handlers::events::delete),
                )
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_auth,
                )),
        )
}

fn contact_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public contact form
        .route("/", post(handlers::contacts::create))
        // Admin inbox
        .merge(
            Router::new()
                .route("/", get(handlers::contacts::list))
                .route(
                    "/:id",
                    put(handlers::contacts::update).delete(handlers::contacts::delete),
                )
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_auth,
                )),
        )
}

fn registration_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::registrations::list))
        .route(
            "/:id",
            put(handlers::registrations::update).delete(handlers::registrations::delete),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}
