use agenda_core::CalendarEvent;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;
use crate::render::Render;

pub fn run() -> Result<()> {
    let config = GlobalConfig::load()?;
    let mut events = config.store().load();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|event| event.start);

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(event);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        println!("  {}", event.render());
    }

    Ok(())
}

/// Format a start date as a human-readable label
/// (e.g. "Today", "Tomorrow", "Wed May 1 2024").
fn format_date_label(event: &CalendarEvent) -> String {
    let today = Local::now().date_naive();
    let date = event.start.date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}
