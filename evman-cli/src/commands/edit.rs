use anyhow::{Context, Result};
use dialoguer::Confirm;
use evman_core::{Coordinator, Editor, EventApi};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::commands::form;
use crate::utils::tui;

pub async fn run(client: &ApiClient, id: String) -> Result<()> {
    let spinner = tui::create_spinner("Loading events...");
    let events = client.list_events(None).await;
    spinner.finish_and_clear();
    let events = events.context("Failed to load events")?;

    let record = events
        .into_iter()
        .find(|e| e.id.as_deref() == Some(id.as_str()))
        .with_context(|| format!("Event '{id}' not found"))?;

    let mut coordinator = Coordinator::new();
    let mut editor = Editor::new();

    coordinator.on_edit(record);
    editor.select(coordinator.selected().cloned());

    form::fill_draft(&mut editor.draft)?;

    let save = Confirm::new()
        .with_prompt(format!("Update \"{}\"?", editor.draft.title))
        .default(true)
        .interact()?;

    if !save {
        // Cancel: reset the draft and clear the selection, nothing is sent
        editor.cancel();
        coordinator.on_save();
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let title = editor.draft.title.clone();

    let spinner = tui::create_spinner("Saving...");
    let result = editor.submit(client).await;
    spinner.finish_and_clear();
    result?;
    coordinator.on_save();

    println!("{}", format!("  Updated: {title}").green());
    Ok(())
}
