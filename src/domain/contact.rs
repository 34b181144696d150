use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// First 100 characters of the message body, for list views.
    pub fn preview(&self) -> String {
        self.message.chars().take(100).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }
}

/// What a visitor submits from the contact form. There is no status field:
/// every new message starts out as `new`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactMessageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundary() {
        let message = ContactMessage {
            id: "m1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "é".repeat(150),
            status: ContactStatus::New,
            created_at: Utc::now(),
        };
        assert_eq!(message.preview().chars().count(), 100);
    }

    #[test]
    fn unknown_status_in_payload_is_ignored() {
        let payload: NewContactMessage = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "subject": "Hello",
            "message": "Hi!",
            "status": "replied"
        }))
        .unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("status").is_none());
    }
}
