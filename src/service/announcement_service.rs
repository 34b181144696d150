use std::sync::Arc;
use validator::Validate;

use crate::{
    domain::{normalize_content, Announcement, AnnouncementUpdate, NewAnnouncement},
    error::{AppError, Result},
    repository::{timestamp_now, DocumentStore, ListQuery, SortDirection, ANNOUNCEMENTS},
    service::into_fields,
};

pub struct AnnouncementService {
    store: Arc<dyn DocumentStore>,
}

impl AnnouncementService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All announcements, newest first.
    pub async fn get_all(&self) -> Result<Vec<Announcement>> {
        let query = ListQuery::ordered_by("createdAt", SortDirection::Descending);
        self.store
            .list(ANNOUNCEMENTS, &query)
            .await?
            .into_iter()
            .map(|doc| doc.into_record())
            .collect()
    }

    /// The `limit` newest announcements (the home page shows three).
    pub async fn recent(&self, limit: usize) -> Result<Vec<Announcement>> {
        let mut announcements = self.get_all().await?;
        announcements.truncate(limit);
        Ok(announcements)
    }

    pub async fn create(&self, mut announcement: NewAnnouncement) -> Result<String> {
        announcement.validate()?;
        announcement.content = checked_content(announcement.content)?;

        let mut fields = into_fields(&announcement)?;
        fields.insert("createdAt".to_string(), timestamp_now());
        fields.insert("updatedAt".to_string(), timestamp_now());

        let id = self.store.insert(ANNOUNCEMENTS, fields).await?;
        tracing::debug!("Created announcement {} ({})", id, announcement.title);
        Ok(id)
    }

    pub async fn update(&self, id: &str, mut update: AnnouncementUpdate) -> Result<()> {
        update.validate()?;
        if let Some(content) = update.content.take() {
            update.content = Some(checked_content(content)?);
        }

        let mut fields = into_fields(&update)?;
        fields.insert("updatedAt".to_string(), timestamp_now());

        self.store.update(ANNOUNCEMENTS, id, fields).await?;
        tracing::debug!("Updated announcement {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(ANNOUNCEMENTS, id).await?;
        tracing::debug!("Deleted announcement {}", id);
        Ok(())
    }
}

fn checked_content(content: Vec<String>) -> Result<Vec<String>> {
    let content = normalize_content(content);
    if content.is_empty() {
        return Err(AppError::Validation(
            "Announcement content must have at least one non-blank line".to_string(),
        ));
    }
    Ok(content)
}
