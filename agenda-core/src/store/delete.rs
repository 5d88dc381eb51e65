//! Delete events from the store.

use super::{EventStore, StorageSlot};
use crate::error::StoreResult;

impl<S: StorageSlot> EventStore<S> {
    /// Remove the event with the given id.
    ///
    /// Persists only when a removal actually happened. Returns whether
    /// an event was removed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut events = self.load();
        let before = events.len();

        events.retain(|event| event.id != id);
        if events.len() == before {
            return Ok(false);
        }

        self.persist(&events)?;
        Ok(true)
    }
}
