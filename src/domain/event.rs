use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Upcoming,
    Ongoing,
    Past,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Upcoming, EventType::Ongoing, EventType::Past];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Upcoming => "upcoming",
            EventType::Ongoing => "ongoing",
            EventType::Past => "past",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Upcoming => "Upcoming",
            EventType::Ongoing => "Ongoing",
            EventType::Past => "Past",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Seminar,
    Workshop,
    Competition,
    Conference,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Seminar,
        EventCategory::Workshop,
        EventCategory::Competition,
        EventCategory::Conference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Seminar => "seminar",
            EventCategory::Workshop => "workshop",
            EventCategory::Competition => "competition",
            EventCategory::Conference => "conference",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Seminar => "Seminar",
            EventCategory::Workshop => "Workshop",
            EventCategory::Competition => "Competition",
            EventCategory::Conference => "Conference",
        }
    }

    /// Accent colour used for the category bar and badge.
    pub fn color(&self) -> &'static str {
        match self {
            EventCategory::Seminar => "#9c27b0",
            EventCategory::Workshop => "#2196f3",
            EventCategory::Competition => "#f44336",
            EventCategory::Conference => "#ff9800",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewEvent {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EventUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    /// `Some(None)` clears the expected attendee count.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    #[schema(value_type = Option<u32>)]
    pub attendees: Option<Option<u32>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
}

/// Distinguishes an explicit `null` (clear) from an absent field (keep).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_null_clears_attendees() {
        let update: EventUpdate = serde_json::from_str(r#"{"attendees": null}"#).unwrap();
        assert_eq!(update.attendees, Some(None));

        let update: EventUpdate = serde_json::from_str(r#"{"title": "Hack Night"}"#).unwrap();
        assert_eq!(update.attendees, None);
    }

    #[test]
    fn cleared_attendees_serialize_as_null() {
        let update = EventUpdate {
            attendees: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "attendees": null }));
    }

    #[test]
    fn category_colors() {
        assert_eq!(EventCategory::Workshop.color(), "#2196f3");
        assert_eq!(EventCategory::Competition.as_str(), "competition");
    }
}
