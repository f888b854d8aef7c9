//! The create/edit form state machine.

use thiserror::Error;
use tracing::error;

use crate::api::EventApi;
use crate::draft::EventDraft;
use crate::error::ApiError;
use crate::event::EventRecord;

/// Which write a successful submit performed. Front-ends use this for the
/// "Added" vs "Updated" confirmation phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Added,
    Updated,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Failed to add event: {0}")]
    Add(ApiError),

    #[error("Failed to update event: {0}")]
    Update(ApiError),

    /// A submission is already in flight; inputs are disabled until it
    /// settles, so a second submit must be refused rather than duplicated.
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Owns the draft for one record and the submit lifecycle around it.
///
/// The selection is pushed in by the coordinator via [`Editor::select`];
/// the presence of an id on the selected record decides whether submit
/// issues a create or an update.
#[derive(Debug, Default)]
pub struct Editor {
    /// Field edits from the front-end land directly on the draft.
    pub draft: EventDraft,
    selected: Option<EventRecord>,
    submitting: bool,
}

impl Editor {
    pub fn new() -> Self {
        Editor::default()
    }

    /// Replace the selection. `Some` prefills the draft from the record
    /// (date truncated to its date-only portion); `None` resets the draft
    /// to defaults.
    pub fn select(&mut self, record: Option<EventRecord>) {
        self.draft = match &record {
            Some(record) => EventDraft::from_record(record),
            None => EventDraft::default(),
        };
        self.selected = record;
    }

    pub fn selected(&self) -> Option<&EventRecord> {
        self.selected.as_ref()
    }

    /// True when editing an existing record (the cancel action is only
    /// offered in this state).
    pub fn is_editing(&self) -> bool {
        self.selected.as_ref().is_some_and(|r| r.id.is_some())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the draft: exactly one update when the selection has an id,
    /// exactly one create otherwise.
    ///
    /// On success the draft resets to defaults and the caller is expected
    /// to invoke the coordinator's `on_save`. On failure the draft is kept
    /// so the user can retry. The submitting flag is cleared on every path.
    pub async fn submit(&mut self, api: &impl EventApi) -> Result<SaveKind, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.submitting = true;

        let existing_id = self.selected.as_ref().and_then(|r| r.id.clone());
        let result = match &existing_id {
            Some(id) => api
                .update_event(id, &self.draft)
                .await
                .map(|_| SaveKind::Updated),
            None => api.create_event(&self.draft).await.map(|_| SaveKind::Added),
        };
        self.submitting = false;

        match result {
            Ok(kind) => {
                self.draft = EventDraft::default();
                Ok(kind)
            }
            Err(err) => {
                error!(id = existing_id.as_deref(), "event submit failed: {err}");
                Err(match existing_id {
                    Some(_) => SubmitError::Update(err),
                    None => SubmitError::Add(err),
                })
            }
        }
    }

    /// Drop the current edit without issuing any request. The caller still
    /// invokes the coordinator's `on_save` to clear the selection.
    pub fn cancel(&mut self) {
        self.draft = EventDraft::default();
    }
}
