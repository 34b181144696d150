pub mod announcements;
pub mod auth;
pub mod contacts;
pub mod events;
pub mod registrations;
pub mod root;

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by create endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    pub id: String,
}
