//! Calendar event types.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Color applied to events that don't carry one of their own.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// A calendar event.
///
/// `start` and `end` are host-local instants, stored as RFC 3339 strings
/// in the persisted blob. `start <= end` is expected but not enforced;
/// [`CalendarEvent::spans_day`] tolerates inverted ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    /// The event's display color, falling back to the default.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Whether this event's span covers the given calendar day.
    ///
    /// Start and end are truncated to whole days, so a timed event counts
    /// on its calendar date and a multi-day event counts on every day it
    /// touches. All-day and timed events use the same rule. An inverted
    /// range (end before start) is normalized rather than matching
    /// nothing.
    pub fn spans_day(&self, day: NaiveDate) -> bool {
        let start = self.start.date_naive();
        let end = self.end.date_naive();

        let (first, last) = if start <= end { (start, end) } else { (end, start) };
        day >= first && day <= last
    }
}

/// Select the events whose span covers the given day.
///
/// This is the per-cell filter: the front end calls it once for each
/// grid cell it renders.
pub fn events_on_day(day: NaiveDate, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.spans_day(day)).collect()
}

/// A new event, before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>,
    pub all_day: bool,
}

impl EventDraft {
    pub(crate) fn into_event(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            description: self.description,
            start: self.start,
            end: self.end,
            color: self.color,
            all_day: self.all_day,
        }
    }
}

/// A partial update: only the fields present are replaced.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub color: Option<String>,
    pub all_day: Option<bool>,
}

impl EventPatch {
    /// Shallow-merge this patch over an event. The id never changes.
    pub fn apply(&self, event: &mut CalendarEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(color) = &self.color {
            event.color = Some(color.clone());
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn standup() -> CalendarEvent {
        CalendarEvent {
            id: "evt-1".to_string(),
            title: "Standup".to_string(),
            description: String::new(),
            start: local(2024, 5, 1, 9, 0),
            end: local(2024, 5, 1, 9, 30),
            color: None,
            all_day: false,
        }
    }

    // --- spans_day ---

    #[test]
    fn timed_event_spans_only_its_day() {
        let event = standup();
        assert!(event.spans_day(ymd(2024, 5, 1)));
        assert!(!event.spans_day(ymd(2024, 5, 2)));
        assert!(!event.spans_day(ymd(2024, 4, 30)));
    }

    #[test]
    fn multi_day_event_spans_every_day_it_touches() {
        let mut event = standup();
        event.start = local(2024, 5, 1, 0, 0);
        event.end = local(2024, 5, 3, 0, 0);
        event.all_day = true;

        assert!(event.spans_day(ymd(2024, 5, 1)));
        assert!(event.spans_day(ymd(2024, 5, 2)));
        assert!(event.spans_day(ymd(2024, 5, 3)));
        assert!(!event.spans_day(ymd(2024, 4, 30)));
        assert!(!event.spans_day(ymd(2024, 5, 4)));
    }

    #[test]
    fn inverted_range_is_normalized() {
        let mut event = standup();
        event.start = local(2024, 5, 3, 9, 0);
        event.end = local(2024, 5, 1, 9, 0);

        assert!(event.spans_day(ymd(2024, 5, 1)));
        assert!(event.spans_day(ymd(2024, 5, 2)));
        assert!(event.spans_day(ymd(2024, 5, 3)));
        assert!(!event.spans_day(ymd(2024, 5, 4)));
    }

    #[test]
    fn events_on_day_filters_by_span() {
        let a = standup();
        let mut b = standup();
        b.id = "evt-2".to_string();
        b.start = local(2024, 5, 2, 10, 0);
        b.end = local(2024, 5, 2, 11, 0);

        let events = vec![a, b];
        let on_first = events_on_day(ymd(2024, 5, 1), &events);
        assert_eq!(on_first.len(), 1);
        assert_eq!(on_first[0].id, "evt-1");
    }

    // --- patch ---

    #[test]
    fn patch_replaces_only_given_fields() {
        let mut event = standup();
        let patch = EventPatch {
            title: Some("Daily sync".to_string()),
            ..EventPatch::default()
        };

        patch.apply(&mut event);

        assert_eq!(event.title, "Daily sync");
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.start, local(2024, 5, 1, 9, 0));
        assert_eq!(event.description, "");
        assert!(!event.all_day);
    }

    // --- serialization ---

    #[test]
    fn color_falls_back_to_default() {
        let mut event = standup();
        assert_eq!(event.color_or_default(), DEFAULT_EVENT_COLOR);

        event.color = Some("#16a34a".to_string());
        assert_eq!(event.color_or_default(), "#16a34a");
    }

    #[test]
    fn all_day_uses_camel_case_on_the_wire() {
        let mut event = standup();
        event.all_day = true;

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"allDay\":true"));
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let json = r#"{
            "id": "evt-9",
            "title": "Dentist",
            "description": "",
            "start": "2024-05-01T09:00:00-03:00",
            "end": "2024-05-01T10:00:00-03:00"
        }"#;

        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.color, None);
        assert!(!event.all_day);
    }
}
