//! Terminal rendering for grids and events.
//!
//! Extension trait plus per-view renderers that turn grid cells and the
//! event collection into colored terminal output using owo_colors.

use agenda_core::date_grid::{is_same_day, is_same_month, month_grid, week_grid};
use agenda_core::{events_on_day, CalendarEvent};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;

/// Weekday header labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Events shown per day in the month view before collapsing to a
/// "+N more" line.
const MONTH_CELL_EVENTS: usize = 3;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let time = if self.all_day {
            "all-day".to_string()
        } else {
            format!("{} - {}", format_time(&self.start), format_time(&self.end))
        };

        format!(
            "{} {} {}",
            colorize(&self.title, self.color_or_default()),
            time.dimmed(),
            format!("[{}]", self.id).dimmed()
        )
    }
}

/// Month view: a day-number grid followed by the month's events,
/// capped per day with a "+N more" overflow line.
pub fn render_month(date: NaiveDate, events: &[CalendarEvent]) -> String {
    let today = Local::now().date_naive();
    let grid = month_grid(date);

    let mut lines = Vec::new();
    lines.push(date.format("%B %Y").to_string().bold().to_string());
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:>4}"))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for week in grid.chunks(7) {
        let row: Vec<String> = week.iter().map(|day| render_month_cell(*day, date, today, events)).collect();
        lines.push(row.join(" "));
    }

    for day in &grid {
        if !is_same_month(day, &date) {
            continue;
        }
        let day_events = events_on_day(*day, events);
        if day_events.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(format_date(*day).bold().to_string());
        for event in day_events.iter().take(MONTH_CELL_EVENTS) {
            lines.push(format!("  {}", event.render()));
        }
        if day_events.len() > MONTH_CELL_EVENTS {
            let more = day_events.len() - MONTH_CELL_EVENTS;
            lines.push(format!("  +{more} more").dimmed().to_string());
        }
    }

    lines.join("\n")
}

fn render_month_cell(
    day: NaiveDate,
    month_of: NaiveDate,
    today: NaiveDate,
    events: &[CalendarEvent],
) -> String {
    let cell = format!("{:>4}", day.day());

    if is_same_day(&day, &today) {
        cell.reversed().to_string()
    } else if !is_same_month(&day, &month_of) {
        cell.dimmed().to_string()
    } else if !events_on_day(day, events).is_empty() {
        cell.bold().to_string()
    } else {
        cell
    }
}

/// Week view: one section per day, all events listed.
pub fn render_week(date: NaiveDate, events: &[CalendarEvent]) -> String {
    let today = Local::now().date_naive();
    let week = week_grid(date);

    let mut lines = Vec::new();
    lines.push(
        format!("Week of {}", format_date(week[0]))
            .bold()
            .to_string(),
    );

    for day in week {
        let label = format_date(day);
        if is_same_day(&day, &today) {
            lines.push(format!("{} {}", label.bold(), "(today)".dimmed()));
        } else {
            lines.push(label);
        }

        for event in events_on_day(day, events) {
            lines.push(format!("  {}", event.render()));
        }
    }

    lines.join("\n")
}

/// Day view: the date's events with their descriptions.
pub fn render_day(date: NaiveDate, events: &[CalendarEvent]) -> String {
    let mut lines = Vec::new();
    lines.push(date.format("%A, %B %-d, %Y").to_string().bold().to_string());

    let day_events = events_on_day(date, events);
    if day_events.is_empty() {
        lines.push("No events for this day".dimmed().to_string());
        return lines.join("\n");
    }

    for event in day_events {
        lines.push(format!("  {}", event.render()));
        if !event.description.is_empty() {
            lines.push(format!("    {}", event.description.dimmed()));
        }
    }

    lines.join("\n")
}

/// Short date label, e.g. "Sun Apr 28".
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}",
        WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize],
        date.format("%b %-d")
    )
}

/// Clock time of an instant, e.g. "09:30".
pub fn format_time(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}

/// Apply a hex color ("#rrggbb") to text, falling back to plain text
/// when the hex doesn't parse.
fn colorize(text: &str, hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
