//! Core types for the evman event manager.
//!
//! This crate provides the pieces shared by every evman front-end:
//! - `EventRecord` and `Category` for the domain entity exchanged with the backend
//! - `EventDraft` for in-progress form state
//! - `EventApi`, the trait seam over the remote events collection
//! - the interaction state machines: `Editor`, `Collection`, `Coordinator`

pub mod api;
pub mod collection;
pub mod coordinator;
pub mod draft;
pub mod editor;
pub mod error;
pub mod event;

#[cfg(test)]
pub(crate) mod mock;

// Re-export the main types at crate root for convenience
pub use api::EventApi;
pub use collection::Collection;
pub use coordinator::Coordinator;
pub use draft::{EventDraft, date_window};
pub use editor::{Editor, SaveKind, SubmitError};
pub use error::{ApiError, ApiResult};
pub use event::{Category, EventRecord};
