use std::sync::Arc;
use validator::Validate;

use crate::{
    domain::{Event, EventRegistration, NewRegistration, RegistrationForm, RegistrationUpdate},
    error::Result,
    repository::{
        timestamp_now, DocumentStore, ListQuery, SortDirection, EVENT_REGISTRATIONS,
    },
    service::into_fields,
};

pub struct RegistrationService {
    store: Arc<dyn DocumentStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All registrations, newest first.
    pub async fn get_all(&self) -> Result<Vec<EventRegistration>> {
        self.list(ListQuery::ordered_by("createdAt", SortDirection::Descending))
            .await
    }

    /// Registrations for one event, newest first.
    pub async fn get_by_event(&self, event_id: &str) -> Result<Vec<EventRegistration>> {
        self.list(
            ListQuery::ordered_by("createdAt", SortDirection::Descending)
                .where_eq("eventId", event_id),
        )
        .await
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<EventRegistration>> {
        self.store
            .list(EVENT_REGISTRATIONS, &query)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }

    pub async fn create(&self, registration: NewRegistration) -> Result<String> {
        registration.validate()?;

        let mut fields = into_fields(&registration)?;
        fields.insert("createdAt".to_string(), timestamp_now());

        let id = self.store.insert(EVENT_REGISTRATIONS, fields).await?;
        tracing::info!(
            "Registration {} for event {} ({})",
            id,
            registration.event_id,
            registration.event_title
        );
        Ok(id)
    }

    /// Registers an attendee for `event`, copying the event's id and its
    /// current title into the registration.
    pub async fn register(&self, event: &Event, form: RegistrationForm) -> Result<String> {
        let phone = form
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        self.create(NewRegistration {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone,
        })
        .await
    }

    pub async fn update(&self, id: &str, update: RegistrationUpdate) -> Result<()> {
        update.validate()?;

        let fields = into_fields(&update)?;
        self.store.update(EVENT_REGISTRATIONS, id, fields).await?;
        tracing::debug!("Updated registration {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(EVENT_REGISTRATIONS, id).await?;
        tracing::debug!("Deleted registration {}", id);
        Ok(())
    }
}
