//! The fetched, filtered list of events.

use tracing::error;

use crate::api::EventApi;
use crate::error::ApiResult;
use crate::event::{Category, EventRecord};

/// Local mirror of the remote collection: the last fetched list, the
/// active category filter and a loading flag.
///
/// The list is never mutated locally; every change goes to the backend and
/// comes back through the next fetch.
#[derive(Debug, Default)]
pub struct Collection {
    events: Vec<EventRecord>,
    category: Option<Category>,
    loading: bool,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// The active filter; `None` means show all.
    pub fn active_filter(&self) -> Option<Category> {
        self.category
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Toggle a category filter: selecting the active one clears it,
    /// selecting another replaces it (single-select). The caller re-fetches
    /// after any toggle.
    pub fn toggle_filter(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Re-fetch the collection from the backend.
    ///
    /// The filter is read at call time, so a refresh triggered by a signal
    /// that was wired up earlier still uses the latest filter value. On
    /// failure the list is cleared (the view shows its empty state) and the
    /// error is only logged; reads never propagate. The loading flag is
    /// cleared on every path.
    pub async fn refresh(&mut self, api: &impl EventApi) {
        self.loading = true;
        let result = api.list_events(self.category).await;
        self.loading = false;

        match result {
            Ok(events) => self.events = events,
            Err(err) => {
                error!(category = ?self.category, "failed to fetch events: {err}");
                self.events.clear();
            }
        }
    }

    /// Delete one record and re-fetch.
    ///
    /// Interactive confirmation is the front-end's job; this is only called
    /// once the user has confirmed. The error is returned so the front-end
    /// can surface a blocking notice.
    pub async fn delete(&mut self, api: &impl EventApi, id: &str) -> ApiResult<()> {
        self.loading = true;
        let result = api.delete_event(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.refresh(api).await;
                Ok(())
            }
            Err(err) => {
                error!(id, "failed to delete event: {err}");
                Err(err)
            }
        }
    }

    /// Whether the edit/delete actions for a row are usable: not while any
    /// request is in flight, and not for the record currently selected in
    /// the editor (it must not be edited or deleted concurrently with
    /// itself).
    pub fn row_actions_enabled(
        &self,
        record: &EventRecord,
        selected: Option<&EventRecord>,
    ) -> bool {
        if self.loading {
            return false;
        }
        match (selected.and_then(|s| s.id.as_deref()), record.id.as_deref()) {
            (Some(selected_id), Some(id)) => selected_id != id,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockApi;

    fn record(id: &str, title: &str, category: Category) -> EventRecord {
        EventRecord {
            id: Some(id.into()),
            title: title.into(),
            description: String::new(),
            date: "2025-06-01".into(),
            category,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn toggling_same_category_twice_clears_the_filter() {
        let mut collection = Collection::new();

        collection.toggle_filter(Category::Work);
        assert_eq!(collection.active_filter(), Some(Category::Work));

        collection.toggle_filter(Category::Work);
        assert_eq!(collection.active_filter(), None);
    }

    #[test]
    fn toggling_two_categories_keeps_only_the_second() {
        let mut collection = Collection::new();

        collection.toggle_filter(Category::Work);
        collection.toggle_filter(Category::Personal);

        assert_eq!(collection.active_filter(), Some(Category::Personal));
    }

    #[tokio::test]
    async fn refresh_replaces_the_list() {
        let api = MockApi::with_events(vec![
            record("1", "Standup", Category::Work),
            record("2", "Dentist", Category::Personal),
        ]);
        let mut collection = Collection::new();

        collection.refresh(&api).await;

        assert_eq!(collection.events().len(), 2);
        assert_eq!(api.list_calls(), 1);
        assert!(!collection.is_loading());
    }

    #[tokio::test]
    async fn refresh_passes_the_filter_read_at_call_time() {
        let api = MockApi::new();
        let mut collection = Collection::new();

        collection.refresh(&api).await;
        assert_eq!(api.last_list_category(), None);

        // Filter set after the first wiring: the next refresh must see it.
        collection.toggle_filter(Category::Other);
        collection.refresh(&api).await;

        assert_eq!(api.last_list_category(), Some(Category::Other));
    }

    #[tokio::test]
    async fn failed_refresh_clears_the_list_and_does_not_propagate() {
        let api = MockApi::with_events(vec![record("1", "Standup", Category::Work)]);
        let mut collection = Collection::new();
        collection.refresh(&api).await;
        assert_eq!(collection.events().len(), 1);

        let failing = MockApi::new().failing_list();
        collection.refresh(&failing).await;

        assert!(collection.events().is_empty());
        assert!(!collection.is_loading());
    }

    #[tokio::test]
    async fn delete_issues_one_request_then_refetches() {
        let api = MockApi::with_events(vec![record("1", "Standup", Category::Work)]);
        let mut collection = Collection::new();

        collection.delete(&api, "1").await.unwrap();

        assert_eq!(api.delete_calls(), 1);
        assert_eq!(api.list_calls(), 1);
        assert!(collection.events().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_surfaces_the_error_without_refetching() {
        let api = MockApi::new().failing_delete();
        let mut collection = Collection::new();

        assert!(collection.delete(&api, "1").await.is_err());
        assert_eq!(api.list_calls(), 0);
        assert!(!collection.is_loading());
    }

    #[test]
    fn row_actions_disabled_for_the_selected_record() {
        let collection = Collection::new();
        let row = record("1", "Standup", Category::Work);
        let other = record("2", "Dentist", Category::Personal);

        assert!(collection.row_actions_enabled(&row, None));
        assert!(collection.row_actions_enabled(&row, Some(&other)));
        assert!(!collection.row_actions_enabled(&row, Some(&row)));
    }
}
