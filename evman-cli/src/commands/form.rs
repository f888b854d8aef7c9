//! Shared field prompts for the create/edit form.
//!
//! Each prompt enforces what the form's native input constraints would:
//! a required title, a date inside the allowed window, a category from
//! the closed set. Current draft values are offered as editable initial
//! text so the edit flow pre-populates.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Input, Select};
use evman_core::{Category, EventDraft, date_window};

pub fn prompt_title(current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("  Title")
        .with_initial_text(current)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Title must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

pub fn prompt_description(current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("  Description (skip)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

pub fn prompt_date(current: &str) -> Result<String> {
    let (min, max) = date_window(Local::now().date_naive());

    Ok(Input::<String>::new()
        .with_prompt(format!("  Date ({min} to {max})"))
        .with_initial_text(current)
        .validate_with(move |input: &String| {
            match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
                Ok(date) if date < min => Err(format!("Date must be on or after {min}")),
                Ok(date) if date > max => Err(format!("Date must be on or before {max}")),
                Ok(_) => Ok(()),
                Err(_) => Err(format!("Could not parse \"{input}\" (expected YYYY-MM-DD)")),
            }
        })
        .interact_text()?)
}

pub fn prompt_category(current: Category) -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let default = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Category::ALL[selection])
}

/// Prompt for every draft field in form order.
pub fn fill_draft(draft: &mut EventDraft) -> Result<()> {
    draft.title = prompt_title(&draft.title)?;
    draft.description = prompt_description(&draft.description)?;
    draft.date = prompt_date(&draft.date)?;
    draft.category = prompt_category(draft.category)?;
    Ok(())
}
