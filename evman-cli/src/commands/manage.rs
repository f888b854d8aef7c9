//! The interactive session: editor and collection side by side, wired
//! through a coordinator.
//!
//! The loop owns the coordinator's selection and refresh generation. After
//! every action it checks the generation like a subscription would: any
//! change means the selection is pushed back into the editor and the
//! collection re-fetches with whatever filter is active at that moment.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use evman_core::{Category, Collection, Coordinator, Editor, EventRecord};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::commands::form;
use crate::render::{self, row_label};
use crate::utils::tui;

const ACTIONS: &[&str] = &[
    "Add event",
    "Edit event",
    "Delete event",
    "Filter by category",
    "Refresh",
    "Quit",
];

pub async fn run(client: &ApiClient) -> Result<()> {
    let mut coordinator = Coordinator::new();
    let mut editor = Editor::new();
    let mut collection = Collection::new();
    let mut seen_generation = coordinator.refresh_generation();

    println!("{}", "Event Manager".bold());
    println!();

    refresh_with_spinner(client, &mut collection).await;

    loop {
        render::print_collection(&collection);
        println!();

        let choice = Select::new()
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()?;
        println!();

        match choice {
            0 => add_flow(client, &mut coordinator, &mut editor).await?,
            1 => edit_flow(client, &mut coordinator, &mut editor, &collection).await?,
            2 => delete_flow(client, &coordinator, &mut collection).await?,
            3 => filter_flow(client, &mut collection).await?,
            4 => refresh_with_spinner(client, &mut collection).await,
            _ => break,
        }

        if coordinator.refresh_generation() != seen_generation {
            seen_generation = coordinator.refresh_generation();
            editor.select(coordinator.selected().cloned());
            refresh_with_spinner(client, &mut collection).await;
        }
        println!();
    }

    Ok(())
}

async fn refresh_with_spinner(client: &ApiClient, collection: &mut Collection) {
    let spinner = tui::create_spinner("Loading events...");
    collection.refresh(client).await;
    spinner.finish_and_clear();
}

/// Create a new record. A draft kept from a failed attempt is offered
/// again; a leftover edit selection is discarded first.
async fn add_flow(
    client: &ApiClient,
    coordinator: &mut Coordinator,
    editor: &mut Editor,
) -> Result<()> {
    if editor.selected().is_some() {
        editor.select(None);
    }

    form::fill_draft(&mut editor.draft)?;
    let title = editor.draft.title.clone();

    let spinner = tui::create_spinner("Saving...");
    let result = editor.submit(client).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            println!("{}", format!("  Added: {title}").green());
            coordinator.on_save();
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

async fn edit_flow(
    client: &ApiClient,
    coordinator: &mut Coordinator,
    editor: &mut Editor,
    collection: &Collection,
) -> Result<()> {
    // A failed update leaves the record selected and the draft intact;
    // in that case re-open it instead of picking a new row
    if !editor.is_editing() {
        let Some(record) = pick_record(coordinator, collection, "Edit which event?")? else {
            return Ok(());
        };

        coordinator.on_edit(record);
        editor.select(coordinator.selected().cloned());
    }

    form::fill_draft(&mut editor.draft)?;

    let save = Confirm::new()
        .with_prompt(format!("Update \"{}\"?", editor.draft.title))
        .default(true)
        .interact()?;

    if !save {
        editor.cancel();
        coordinator.on_save();
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let title = editor.draft.title.clone();

    let spinner = tui::create_spinner("Saving...");
    let result = editor.submit(client).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            println!("{}", format!("  Updated: {title}").green());
            coordinator.on_save();
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
    Ok(())
}

async fn delete_flow(
    client: &ApiClient,
    coordinator: &Coordinator,
    collection: &mut Collection,
) -> Result<()> {
    let Some(record) = pick_record(coordinator, collection, "Delete which event?")? else {
        return Ok(());
    };
    let Some(id) = record.id.clone() else {
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt("Delete this event?")
        .default(false)
        .interact()?;

    if !confirmed {
        return Ok(());
    }

    let spinner = tui::create_spinner("Deleting...");
    let result = collection.delete(client, &id).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => println!("{}", format!("  Deleted: {}", record.title).green()),
        Err(_) => println!("{}", "Failed to delete event. Please try again.".red()),
    }
    Ok(())
}

async fn filter_flow(client: &ApiClient, collection: &mut Collection) -> Result<()> {
    let active = collection.active_filter();
    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            if active == Some(*c) {
                format!("{} (active, select to clear)", c.label())
            } else {
                c.label().to_string()
            }
        })
        .chain(std::iter::once("Show all".to_string()))
        .collect();

    let selection = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    match Category::ALL.get(selection) {
        Some(category) => collection.toggle_filter(*category),
        None => {
            if let Some(active) = active {
                collection.toggle_filter(active);
            }
        }
    }

    // A filter change re-fetches on its own, independent of the generation
    refresh_with_spinner(client, collection).await;
    Ok(())
}

/// Offer the rows whose actions are currently enabled (none while a
/// request is in flight, never the record selected in the editor).
fn pick_record(
    coordinator: &Coordinator,
    collection: &Collection,
    prompt: &str,
) -> Result<Option<EventRecord>> {
    let rows: Vec<&EventRecord> = collection
        .events()
        .iter()
        .filter(|e| collection.row_actions_enabled(e, coordinator.selected()))
        .collect();

    if rows.is_empty() {
        println!("{}", "Nothing to select".dimmed());
        return Ok(None);
    }

    let labels: Vec<String> = rows.iter().map(|e| row_label(e)).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(rows[selection].clone()))
}
