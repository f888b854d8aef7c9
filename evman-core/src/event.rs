//! The event record exchanged with the backend.
//!
//! The backend owns validation, storage and id assignment; this type only
//! mirrors its JSON shape. A record without an `id` has not been persisted
//! yet, and that absence is what distinguishes create from update intent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted (or to-be-persisted) event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Backend-assigned identifier; `None` until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date or date-time string as stored by the backend.
    pub date: String,
    pub category: Category,
    /// Server-assigned, read-only from the client's perspective.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Other];

    /// Wire value, as sent in the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Unknown category '{0}' (expected work, personal or other)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "other" => Ok(Category::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_lowercase() {
        let json = serde_json::to_string(&Category::Personal).unwrap();
        assert_eq!(json, "\"personal\"");
        let back: Category = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(back, Category::Other);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Work".parse::<Category>().unwrap(), Category::Work);
        assert!("meeting".parse::<Category>().is_err());
    }

    #[test]
    fn record_deserializes_server_shape() {
        let record: EventRecord = serde_json::from_str(
            r#"{
                "id": "abc123",
                "title": "Standup",
                "description": "",
                "date": "2025-06-01T00:00:00.000Z",
                "category": "work",
                "createdAt": "2025-05-20T09:00:00.000Z",
                "updatedAt": "2025-05-21T09:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("abc123"));
        assert_eq!(record.category, Category::Work);
        assert_eq!(record.created_at.as_deref(), Some("2025-05-20T09:00:00.000Z"));
    }

    #[test]
    fn unsaved_record_serializes_without_id() {
        let record = EventRecord {
            id: None,
            title: "Standup".into(),
            description: String::new(),
            date: "2025-06-01".into(),
            category: Category::Work,
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("createdAt"));
    }
}
