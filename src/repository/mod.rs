use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

pub mod document_store;

pub use document_store::SqliteDocumentStore;

pub const ANNOUNCEMENTS: &str = "announcements";
pub const EVENTS: &str = "events";
pub const CONTACT_MESSAGES: &str = "contact_messages";
pub const EVENT_REGISTRATIONS: &str = "event_registrations";

pub type Fields = Map<String, Value>;

/// One stored record: the store-assigned id plus its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Maps the document onto a record type, exposing the id as an `id` field.
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter: Option<(String, String)>,
    pub order_by: String,
    pub direction: SortDirection,
}

impl ListQuery {
    pub fn ordered_by(field: &str, direction: SortDirection) -> Self {
        Self {
            filter: None,
            order_by: field.to_string(),
            direction,
        }
    }

    /// Restricts the listing to documents whose `field` equals `value`.
    pub fn where_eq(mut self, field: &str, value: &str) -> Self {
        self.filter = Some((field.to_string(), value.to_string()));
        self
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, fields: Fields) -> Result<String>;
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;
    async fn list(&self, collection: &str, query: &ListQuery) -> Result<Vec<Document>>;
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Current time in the fixed-width form stored in documents, so that
/// lexical order of timestamps matches chronological order.
pub fn timestamp_now() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}

/// JSON path for a top-level field. Only plain identifiers are accepted.
pub(crate) fn field_path(field: &str) -> Result<String> {
    let valid = !field.is_empty()
        && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(AppError::BadRequest(format!("Invalid field name: {}", field)));
    }
    Ok(format!("$.{}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_paths_reject_expressions() {
        assert_eq!(field_path("createdAt").unwrap(), "$.createdAt");
        assert!(field_path("a.b").is_err());
        assert!(field_path("x') OR 1=1 --").is_err());
        assert!(field_path("").is_err());
    }

    #[test]
    fn timestamps_have_fixed_width() {
        let Value::String(stamp) = timestamp_now() else {
            panic!("timestamp should be a string");
        };
        // 2025-01-01T00:00:00.000000Z
        assert_eq!(stamp.len(), 27);
        assert!(stamp.ends_with('Z'));
    }

    #[test]
    fn into_record_exposes_id() {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), Value::String("Jo".to_string()));
        let doc = Document { id: "r1".to_string(), fields };

        #[derive(serde::Deserialize)]
        struct Named {
            id: String,
            name: String,
        }
        let named: Named = doc.into_record().unwrap();
        assert_eq!(named.id, "r1");
        assert_eq!(named.name, "Jo");
    }
}
