use anyhow::Result;
use chrono::Local;
use evman_core::{Category, Editor};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::commands::form;
use crate::utils::tui;

pub async fn run(
    client: &ApiClient,
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    category: Option<Category>,
) -> Result<()> {
    let mut editor = Editor::new();

    // Prompt only for what the arguments did not provide
    editor.draft.title = match title {
        Some(title) => title,
        None => form::prompt_title("")?,
    };
    editor.draft.description = match description {
        Some(description) => description,
        None => form::prompt_description("")?,
    };
    editor.draft.date = match date {
        Some(date) => date,
        None => form::prompt_date("")?,
    };
    editor.draft.category = match category {
        Some(category) => category,
        None => form::prompt_category(editor.draft.category)?,
    };

    // Arguments bypass the prompts' inline checks, so validate the whole
    // draft before it goes out
    editor
        .draft
        .validate(Local::now().date_naive())
        .map_err(|e| anyhow::anyhow!(e))?;

    let title = editor.draft.title.clone();

    let spinner = tui::create_spinner("Saving...");
    let result = editor.submit(client).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("  Added: {title}").green());
    Ok(())
}
