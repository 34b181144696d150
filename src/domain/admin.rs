use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A site administrator. Passwords live only as argon2 hashes in the
/// `admins` table and never leave the auth module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
