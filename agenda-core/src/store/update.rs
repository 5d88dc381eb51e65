//! Update events in the store.

use super::{EventStore, StorageSlot};
use crate::error::StoreResult;
use crate::event::{CalendarEvent, EventPatch};

impl<S: StorageSlot> EventStore<S> {
    /// Merge `patch` over the event with the given id.
    ///
    /// Only the fields present in the patch are replaced; the id never
    /// changes. Returns `Ok(None)` without touching the slot when no
    /// event matches.
    pub fn update(&self, id: &str, patch: EventPatch) -> StoreResult<Option<CalendarEvent>> {
        let mut events = self.load();

        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(None);
        };

        patch.apply(event);
        let updated = event.clone();
        self.persist(&events)?;

        Ok(Some(updated))
    }
}
