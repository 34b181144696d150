pub mod announcement_service;
pub mod contact_service;
pub mod event_service;
pub mod registration_service;

use std::sync::Arc;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::auth::{AuthService, CsrfService};
use crate::config::AuthConfig;
use crate::error::{AppError, Result};
use crate::repository::{DocumentStore, Fields, SqliteDocumentStore};

pub use announcement_service::AnnouncementService;
pub use contact_service::ContactService;
pub use event_service::EventService;
pub use registration_service::RegistrationService;

pub struct ServiceContext {
    pub store: Arc<dyn DocumentStore>,
    pub announcement_service: Arc<AnnouncementService>,
    pub event_service: Arc<EventService>,
    pub contact_service: Arc<ContactService>,
    pub registration_service: Arc<RegistrationService>,
    pub auth_service: Arc<AuthService>,
    pub csrf_service: Arc<CsrfService>,
    pub db_pool: SqlitePool,
}

impl ServiceContext {
    pub fn new(db_pool: SqlitePool, auth_config: &AuthConfig) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(SqliteDocumentStore::new(db_pool.clone()));
        Self::with_store(store, db_pool, auth_config)
    }

    /// Builds the services over an arbitrary document store. Auth still
    /// uses the SQLite pool.
    pub fn with_store(
        store: Arc<dyn DocumentStore>,
        db_pool: SqlitePool,
        auth_config: &AuthConfig,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            db_pool.clone(),
            auth_config.session_duration_hours,
            auth_config.secure_cookies,
        ));
        let csrf_service = Arc::new(CsrfService::new(db_pool.clone()));

        Self {
            announcement_service: Arc::new(AnnouncementService::new(store.clone())),
            event_service: Arc::new(EventService::new(store.clone())),
            contact_service: Arc::new(ContactService::new(store.clone())),
            registration_service: Arc::new(RegistrationService::new(store.clone())),
            store,
            auth_service,
            csrf_service,
            db_pool,
        }
    }
}

/// Serializes a payload into top-level document fields.
pub(crate) fn into_fields<T: Serialize>(payload: &T) -> Result<Fields> {
    match serde_json::to_value(payload)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::Internal(format!(
            "Expected an object payload, got {}",
            other
        ))),
    }
}
