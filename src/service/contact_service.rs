use std::sync::Arc;
use serde_json::Value;
use validator::Validate;

use crate::{
    domain::{ContactMessage, ContactMessageUpdate, ContactStatus, NewContactMessage},
    error::Result,
    repository::{timestamp_now, DocumentStore, ListQuery, SortDirection, CONTACT_MESSAGES},
    service::into_fields,
};

pub struct ContactService {
    store: Arc<dyn DocumentStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All messages, newest first.
    pub async fn get_all(&self) -> Result<Vec<ContactMessage>> {
        let query = ListQuery::ordered_by("createdAt", SortDirection::Descending);
        self.store
            .list(CONTACT_MESSAGES, &query)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }

    pub async fn create(&self, message: NewContactMessage) -> Result<String> {
        message.validate()?;

        let mut fields = into_fields(&message)?;
        fields.insert(
            "status".to_string(),
            Value::String(ContactStatus::New.as_str().to_string()),
        );
        fields.insert("createdAt".to_string(), timestamp_now());

        let id = self.store.insert(CONTACT_MESSAGES, fields).await?;
        tracing::info!("New contact message {} from {}", id, message.email);
        Ok(id)
    }

    /// Contact messages carry no update timestamp.
    pub async fn update(&self, id: &str, update: ContactMessageUpdate) -> Result<()> {
        update.validate()?;

        let fields = into_fields(&update)?;
        self.store.update(CONTACT_MESSAGES, id, fields).await?;
        tracing::debug!("Updated contact message {}", id);
        Ok(())
    }

    pub async fn update_status(&self, id: &str, status: ContactStatus) -> Result<()> {
        self.update(
            id,
            ContactMessageUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(CONTACT_MESSAGES, id).await?;
        tracing::debug!("Deleted contact message {}", id);
        Ok(())
    }
}
