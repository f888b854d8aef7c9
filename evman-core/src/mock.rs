//! In-memory `EventApi` used by the state-machine tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::EventApi;
use crate::draft::EventDraft;
use crate::error::{ApiError, ApiResult};
use crate::event::{Category, EventRecord};

/// Fake backend: serves a list, assigns ids on create, counts every call
/// and can be told to fail any one operation.
#[derive(Default)]
pub struct MockApi {
    events: Mutex<Vec<EventRecord>>,
    next_id: AtomicUsize,

    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,

    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,

    last_list_category: Mutex<Option<Category>>,
    last_update_id: Mutex<Option<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi::default()
    }

    pub fn with_events(events: Vec<EventRecord>) -> Self {
        MockApi {
            events: Mutex::new(events),
            ..MockApi::default()
        }
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn last_list_category(&self) -> Option<Category> {
        *self.last_list_category.lock().unwrap()
    }

    pub fn last_update_id(&self) -> Option<String> {
        self.last_update_id.lock().unwrap().clone()
    }

    fn record_from(&self, id: String, draft: &EventDraft) -> EventRecord {
        EventRecord {
            id: Some(id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date.clone(),
            category: draft.category,
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl EventApi for MockApi {
    async fn list_events(&self, category: Option<Category>) -> ApiResult<Vec<EventRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list_category.lock().unwrap() = category;

        if self.fail_list {
            return Err(ApiError::Transport("connection refused".into()));
        }

        let events = self.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .cloned()
            .collect())
    }

    async fn create_event(&self, draft: &EventDraft) -> ApiResult<EventRecord> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_create {
            return Err(ApiError::Status(500));
        }

        let id = format!("ev{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let record = self.record_from(id, draft);
        self.events.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_event(&self, id: &str, draft: &EventDraft) -> ApiResult<EventRecord> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update_id.lock().unwrap() = Some(id.to_string());

        if self.fail_update {
            return Err(ApiError::Status(500));
        }

        let record = self.record_from(id.to_string(), draft);
        let mut events = self.events.lock().unwrap();
        if let Some(slot) = events.iter_mut().find(|e| e.id.as_deref() == Some(id)) {
            *slot = record.clone();
        }
        Ok(record)
    }

    async fn delete_event(&self, id: &str) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_delete {
            return Err(ApiError::Status(500));
        }

        self.events
            .lock()
            .unwrap()
            .retain(|e| e.id.as_deref() != Some(id));
        Ok(())
    }
}
