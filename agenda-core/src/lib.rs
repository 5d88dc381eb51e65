//! Core types for the agenda calendar.
//!
//! This crate provides everything the front end needs short of rendering:
//! - `CalendarEvent` and related types for calendar events
//! - `date_grid` for month/week/day grid computation and date predicates
//! - `EventStore` for durable CRUD and search over a storage slot

pub mod date_grid;
pub mod error;
pub mod event;
pub mod store;

pub use date_grid::View;
pub use error::{StoreError, StoreResult};
pub use event::{events_on_day, CalendarEvent, EventDraft, EventPatch, DEFAULT_EVENT_COLOR};
pub use store::{EventStore, FileSlot, MemorySlot, StorageSlot};
