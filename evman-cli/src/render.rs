//! Terminal rendering for evman types.
//!
//! Extension traits that add colored output to evman-core types using
//! owo_colors, plus the list/empty-state helpers shared by the commands.

use chrono::NaiveDate;
use evman_core::{Category, Collection, EventRecord};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        match self {
            Category::Work => self.label().blue().to_string(),
            Category::Personal => self.label().green().to_string(),
            Category::Other => self.label().yellow().to_string(),
        }
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let mut lines = vec![format!("  {}", self.title.bold())];
        if !self.description.is_empty() {
            lines.push(format!("  {}", self.description));
        }
        lines.push(format!(
            "  {} • {}",
            format_date(&self.date).dimmed(),
            self.category.render()
        ));
        lines.join("\n")
    }
}

/// One-line form used by the edit/delete pickers.
pub fn row_label(record: &EventRecord) -> String {
    format!(
        "{} ({}, {})",
        record.title,
        format_date(&record.date),
        record.category.as_str()
    )
}

/// Print the collection: active filter, then rows or the empty state.
pub fn print_collection(collection: &Collection) {
    if let Some(category) = collection.active_filter() {
        println!("Filter: {}", category.render());
        println!();
    }

    if collection.events().is_empty() {
        println!("{}", "No events found.".dimmed());
        return;
    }

    for (i, event) in collection.events().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", event.render());
    }
}

/// Format a stored ISO date(-time) string as a local, human-readable date.
/// Falls back to the raw string if the date portion does not parse.
fn format_date(raw: &str) -> String {
    let date_part: String = raw.chars().take(10).collect();
    match NaiveDate::parse_from_str(&date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%a %b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_truncates_datetimes() {
        assert_eq!(format_date("2025-06-01T09:30:00.000Z"), "Sun Jun 1, 2025");
    }

    #[test]
    fn format_date_falls_back_to_raw_input() {
        assert_eq!(format_date("whenever"), "whenever");
    }

    #[test]
    fn row_label_is_single_line() {
        let record = EventRecord {
            id: Some("abc123".into()),
            title: "Standup".into(),
            description: "daily sync".into(),
            date: "2025-06-01".into(),
            category: Category::Work,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(row_label(&record), "Standup (Sun Jun 1, 2025, work)");
    }
}
