//! Substring search over the store.

use super::{EventStore, StorageSlot};
use crate::event::CalendarEvent;

impl<S: StorageSlot> EventStore<S> {
    /// Case-insensitive substring match against title or description.
    ///
    /// The empty query matches every event, so "blank search box shows
    /// the whole calendar" needs no special-casing in the caller.
    pub fn search(&self, query: &str) -> Vec<CalendarEvent> {
        let query = query.to_lowercase();

        self.load()
            .into_iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&query)
                    || event.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}
