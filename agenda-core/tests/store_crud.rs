use agenda_core::{EventDraft, EventPatch, EventStore, FileSlot, MemorySlot};
use chrono::{DateTime, Local, TimeZone};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn draft(title: &str, description: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: description.to_string(),
        start: local(2024, 5, 1, 9, 0),
        end: local(2024, 5, 1, 9, 30),
        color: None,
        all_day: false,
    }
}

#[test]
fn create_then_load_round_trips_all_fields() {
    let store = EventStore::new(MemorySlot::new());

    let mut input = draft("Standup", "daily sync");
    input.color = Some("#16a34a".to_string());
    let created = store.create(input).unwrap();

    assert!(!created.id.is_empty());

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, created.id);
    assert_eq!(loaded[0].title, "Standup");
    assert_eq!(loaded[0].description, "daily sync");
    assert_eq!(loaded[0].start, local(2024, 5, 1, 9, 0));
    assert_eq!(loaded[0].end, local(2024, 5, 1, 9, 30));
    assert_eq!(loaded[0].color.as_deref(), Some("#16a34a"));
    assert!(!loaded[0].all_day);
}

#[test]
fn create_assigns_a_fresh_id_per_event() {
    let store = EventStore::new(MemorySlot::new());

    let a = store.create(draft("Standup", "")).unwrap();
    let b = store.create(draft("Standup", "")).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(store.load().len(), 2);
}

#[test]
fn update_merges_only_the_given_fields() {
    let store = EventStore::new(MemorySlot::new());
    let created = store.create(draft("Standup", "daily sync")).unwrap();

    let patch = EventPatch {
        title: Some("Retro".to_string()),
        ..EventPatch::default()
    };
    let updated = store.update(&created.id, patch).unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Retro");
    assert_eq!(updated.description, "daily sync");
    assert_eq!(updated.start, created.start);

    assert_eq!(store.load(), vec![updated]);
}

#[test]
fn update_unknown_id_has_no_side_effects() {
    let store = EventStore::new(MemorySlot::new());
    store.create(draft("Standup", "")).unwrap();

    let patch = EventPatch {
        title: Some("Retro".to_string()),
        ..EventPatch::default()
    };
    let result = store.update("no-such-id", patch).unwrap();

    assert!(result.is_none());
    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Standup");
}

#[test]
fn delete_removes_exactly_one_event() {
    let store = EventStore::new(MemorySlot::new());
    let a = store.create(draft("Standup", "")).unwrap();
    let b = store.create(draft("Retro", "")).unwrap();

    assert!(store.delete(&a.id).unwrap());

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, b.id);
}

#[test]
fn delete_unknown_id_returns_false_and_keeps_the_collection() {
    let store = EventStore::new(MemorySlot::new());
    store.create(draft("Standup", "")).unwrap();

    assert!(!store.delete("no-such-id").unwrap());
    assert_eq!(store.load().len(), 1);
}

#[test]
fn search_matches_title_and_description_case_insensitively() {
    let store = EventStore::new(MemorySlot::new());
    store.create(draft("Team Meeting", "")).unwrap();
    store.create(draft("Retro", "weekly meeting notes")).unwrap();
    store.create(draft("Dentist", "bring insurance card")).unwrap();

    let matches = store.search("meeting");
    let titles: Vec<_> = matches.iter().map(|e| e.title.as_str()).collect();

    assert_eq!(matches.len(), 2);
    assert!(titles.contains(&"Team Meeting"));
    assert!(titles.contains(&"Retro"));
}

#[test]
fn search_with_an_empty_query_returns_everything() {
    let store = EventStore::new(MemorySlot::new());
    store.create(draft("Standup", "")).unwrap();
    store.create(draft("Retro", "")).unwrap();

    assert_eq!(store.search("").len(), 2);
}

#[test]
fn two_stores_over_one_slot_observe_each_other() {
    let slot = MemorySlot::new();
    let writer = EventStore::new(&slot);
    let reader = EventStore::new(&slot);

    let created = writer.create(draft("Standup", "")).unwrap();

    let seen = reader.load();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, created.id);
}

#[test]
fn file_slot_round_trips_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");

    let created = {
        let store = EventStore::new(FileSlot::new(&path));
        store.create(draft("Standup", "daily sync")).unwrap()
    };

    let store = EventStore::new(FileSlot::new(&path));
    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], created);
}

#[test]
fn file_slot_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::new(FileSlot::new(dir.path().join("events.json")));

    assert!(store.load().is_empty());
}

#[test]
fn file_slot_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let store = EventStore::new(FileSlot::new(&path));
    assert!(store.load().is_empty());
}

#[test]
fn file_slot_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/data/events.json");

    let store = EventStore::new(FileSlot::new(&path));
    store.create(draft("Standup", "")).unwrap();

    assert!(path.exists());
    assert_eq!(store.load().len(), 1);
}
