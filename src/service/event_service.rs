use std::sync::Arc;
use validator::Validate;

use crate::{
    domain::{Event, EventUpdate, NewEvent},
    error::Result,
    repository::{timestamp_now, DocumentStore, ListQuery, SortDirection, EVENTS},
    service::into_fields,
};

pub struct EventService {
    store: Arc<dyn DocumentStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All events ordered by their display date. The date is free text, so
    /// this is plain string order.
    pub async fn get_all(&self) -> Result<Vec<Event>> {
        let query = ListQuery::ordered_by("date", SortDirection::Ascending);
        self.store
            .list(EVENTS, &query)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<Option<Event>> {
        self.store
            .get(EVENTS, id)
            .await?
            .map(|doc| doc.into_record())
            .transpose()
    }

    pub async fn create(&self, event: NewEvent) -> Result<String> {
        event.validate()?;

        let mut fields = into_fields(&event)?;
        fields.insert("createdAt".to_string(), timestamp_now());
        fields.insert("updatedAt".to_string(), timestamp_now());

        let id = self.store.insert(EVENTS, fields).await?;
        tracing::debug!("Created event {} ({})", id, event.title);
        Ok(id)
    }

    pub async fn update(&self, id: &str, update: EventUpdate) -> Result<()> {
        update.validate()?;

        let mut fields = into_fields(&update)?;
        fields.insert("updatedAt".to_string(), timestamp_now());

        self.store.update(EVENTS, id, fields).await?;
        tracing::debug!("Updated event {}", id);
        Ok(())
    }

    /// Registrations that reference the event are left in place.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(EVENTS, id).await?;
        tracing::debug!("Deleted event {}", id);
        Ok(())
    }
}
