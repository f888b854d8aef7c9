use anyhow::{Context, Result};
use dialoguer::Confirm;
use evman_core::{Collection, EventApi};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::render::Render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, id: String, force: bool) -> Result<()> {
    let spinner = tui::create_spinner("Loading events...");
    let events = client.list_events(None).await;
    spinner.finish_and_clear();
    let events = events.context("Failed to load events")?;

    let record = events
        .into_iter()
        .find(|e| e.id.as_deref() == Some(id.as_str()))
        .with_context(|| format!("Event '{id}' not found"))?;

    println!("{}", record.render());
    println!();

    // Confirm unless --force
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let mut collection = Collection::new();

    let spinner = tui::create_spinner("Deleting...");
    let result = collection.delete(client, &id).await;
    spinner.finish_and_clear();
    result.context("Failed to delete event. Please try again.")?;

    println!("{}", format!("  Deleted: {}", record.title).green());
    Ok(())
}
