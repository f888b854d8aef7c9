//! Parent-owned wiring between the editor and the collection.

use crate::event::EventRecord;

/// Single source of truth for "which record is being edited" and the
/// refresh generation the collection watches.
///
/// No state machine beyond these two fields: `on_edit` and `on_save` are
/// plain assignments. A front-end passes the selection into its editor and
/// re-fetches its collection whenever it observes the generation change.
#[derive(Debug, Default)]
pub struct Coordinator {
    selected: Option<EventRecord>,
    refresh_generation: u64,
}

impl Coordinator {
    pub fn new() -> Self {
        Coordinator::default()
    }

    pub fn selected(&self) -> Option<&EventRecord> {
        self.selected.as_ref()
    }

    /// Any change of this value (not just an increment) means "re-fetch".
    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation
    }

    /// A row's edit action was used: make that record the selection.
    pub fn on_edit(&mut self, record: EventRecord) {
        self.selected = Some(record);
    }

    /// The editor finished (saved or cancelled): clear the selection and
    /// signal the collection to re-fetch.
    pub fn on_save(&mut self) {
        self.selected = None;
        self.refresh_generation = self.refresh_generation.wrapping_add(1);
    }
}
