//! Create events in the store.

use uuid::Uuid;

use super::{EventStore, StorageSlot};
use crate::error::StoreResult;
use crate::event::{CalendarEvent, EventDraft};

impl<S: StorageSlot> EventStore<S> {
    /// Append a new event to the collection.
    ///
    /// The id is generated here; everything else comes from the draft.
    /// Returns the stored event with its id populated.
    pub fn create(&self, draft: EventDraft) -> StoreResult<CalendarEvent> {
        let event = draft.into_event(Uuid::new_v4().to_string());

        let mut events = self.load();
        events.push(event.clone());
        self.persist(&events)?;

        Ok(event)
    }
}
