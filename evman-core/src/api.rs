//! The seam over the remote events collection.

use async_trait::async_trait;

use crate::draft::EventDraft;
use crate::error::ApiResult;
use crate::event::{Category, EventRecord};

/// Client interface to the backend's `/events` resource.
///
/// The backend owns validation, storage and id assignment; implementations
/// only move JSON. The CLI provides a reqwest-backed implementation, tests
/// use an in-memory mock.
#[async_trait]
pub trait EventApi {
    /// Fetch all records, optionally constrained to one category.
    async fn list_events(&self, category: Option<Category>) -> ApiResult<Vec<EventRecord>>;

    /// Persist a new record. The response carries the assigned id.
    async fn create_event(&self, draft: &EventDraft) -> ApiResult<EventRecord>;

    /// Replace the record with the given id.
    async fn update_event(&self, id: &str, draft: &EventDraft) -> ApiResult<EventRecord>;

    /// Destroy the record with the given id. No undo.
    async fn delete_event(&self, id: &str) -> ApiResult<()>;
}
