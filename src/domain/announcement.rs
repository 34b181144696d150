use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    /// Display date as typed by the editor, e.g. "March 15, 2024".
    pub date: String,
    /// One entry per paragraph, in display order.
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    #[default]
    Important,
    Achievement,
    Event,
    Facility,
}

impl AnnouncementType {
    pub const ALL: [AnnouncementType; 4] = [
        AnnouncementType::Important,
        AnnouncementType::Achievement,
        AnnouncementType::Event,
        AnnouncementType::Facility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementType::Important => "important",
            AnnouncementType::Achievement => "achievement",
            AnnouncementType::Event => "event",
            AnnouncementType::Facility => "facility",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnnouncementType::Important => "Important",
            AnnouncementType::Achievement => "Achievement",
            AnnouncementType::Event => "Event",
            AnnouncementType::Facility => "Facility Update",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewAnnouncement {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub announcement_type: AnnouncementType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnnouncementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub announcement_type: Option<AnnouncementType>,
}

/// Drops whitespace-only lines, keeping the rest untouched and in order.
pub fn normalize_content<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines
        .into_iter()
        .map(Into::<String>::into)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
