use anyhow::Result;
use evman_core::{Category, Collection};

use crate::client::ApiClient;
use crate::render;
use crate::utils::tui;

pub async fn run(client: &ApiClient, category: Option<Category>) -> Result<()> {
    let mut collection = Collection::new();
    if let Some(category) = category {
        collection.toggle_filter(category);
    }

    let spinner = tui::create_spinner("Loading events...");
    collection.refresh(client).await;
    spinner.finish_and_clear();

    render::print_collection(&collection);
    Ok(())
}
