//! In-progress form state for a single event.

use chrono::{Months, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::event::{Category, EventRecord};

/// The unsaved draft behind the create/edit form.
///
/// Holds only the fields the user edits; server-only fields (`id`,
/// timestamps) never enter the draft. Serializes to the request body for
/// both create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`; empty until the user picks a date.
    pub date: String,
    pub category: Category,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            category: Category::Work,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Date is required (YYYY-MM-DD)")]
    MissingDate,

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date must be between {min} and {max}")]
    DateOutOfRange { min: NaiveDate, max: NaiveDate },
}

impl EventDraft {
    /// Prefill the draft from an existing record.
    ///
    /// The stored date may be a full date-time; only the date portion is
    /// editable, so it is truncated to `YYYY-MM-DD`.
    pub fn from_record(record: &EventRecord) -> Self {
        EventDraft {
            title: record.title.clone(),
            description: record.description.clone(),
            date: record.date.chars().take(10).collect(),
            category: record.category,
        }
    }

    /// Check the constraints the form enforces at input time:
    /// non-empty title and a date inside [`date_window`].
    pub fn validate(&self, today: NaiveDate) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.date.is_empty() {
            return Err(DraftError::MissingDate);
        }

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;

        let (min, max) = date_window(today);
        if date < min || date > max {
            return Err(DraftError::DateOutOfRange { min, max });
        }

        Ok(())
    }
}

/// The allowed date range for new input: today through one year from today.
pub fn date_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    // checked_add_months clamps Feb 29 to Feb 28 of the next year
    let max = today
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX);
    (today, max)
}
