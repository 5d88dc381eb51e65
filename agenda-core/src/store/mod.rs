//! Durable event storage.
//!
//! Manages the event collection as a single serialized blob in a named
//! storage slot: one JSON file on disk, or an in-memory fake in tests.

mod create;
mod delete;
mod search;
mod slot;
mod update;

pub use slot::{FileSlot, MemorySlot, StorageSlot};

use tracing::warn;

use crate::error::StoreResult;
use crate::event::CalendarEvent;

/// Repository over the event collection.
///
/// Every operation reloads the collection from the slot before acting,
/// so the store never serves a stale cache. There is no locking:
/// concurrent writers to the same slot race and the last write wins.
pub struct EventStore<S: StorageSlot> {
    slot: S,
}

impl<S: StorageSlot> EventStore<S> {
    pub fn new(slot: S) -> Self {
        EventStore { slot }
    }

    /// Load the full event collection from the slot.
    ///
    /// Fails soft: an absent, unreadable, or malformed slot yields an
    /// empty collection. The failure is logged, never raised.
    pub fn load(&self) -> Vec<CalendarEvent> {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Could not read event slot: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(events) => events,
            Err(e) => {
                warn!("Malformed event slot, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the slot.
    ///
    /// Unlike `load`, failures are surfaced so callers can react to a
    /// full or broken slot; callers that want fire-and-forget writes
    /// can ignore the result.
    pub fn persist(&self, events: &[CalendarEvent]) -> StoreResult<()> {
        let contents = serde_json::to_string(events)?;
        self.slot.write(&contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::{Local, TimeZone};

    use super::*;
    use crate::event::EventDraft;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            start: Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            end: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            color: None,
            all_day: false,
        }
    }

    #[test]
    fn load_from_an_unwritten_slot_is_empty() {
        let store = EventStore::new(MemorySlot::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_from_a_malformed_slot_is_empty() {
        let slot = MemorySlot::new();
        slot.write("not json at all").unwrap();

        let store = EventStore::new(slot);
        assert!(store.load().is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let store = EventStore::new(MemorySlot::new());
        let event = store.create(draft("Standup")).unwrap();

        assert_eq!(store.load(), vec![event]);
    }

    #[test]
    fn persist_surfaces_slot_write_failure() {
        struct BrokenSlot;

        impl StorageSlot for BrokenSlot {
            fn read(&self) -> io::Result<Option<String>> {
                Ok(None)
            }

            fn write(&self, _contents: &str) -> io::Result<()> {
                Err(io::Error::other("quota exceeded"))
            }
        }

        let store = EventStore::new(BrokenSlot);
        assert!(store.persist(&[]).is_err());
        assert!(store.create(draft("Standup")).is_err());
    }
}
