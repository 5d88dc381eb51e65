use agenda_core::{CalendarEvent, View};
use anyhow::Result;
use chrono::NaiveDate;

use crate::config::GlobalConfig;
use crate::render;

pub fn run(view: View, date: NaiveDate, query: Option<&str>) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = config.store();

    // A blank query means no filtering, same as no query at all
    let events: Vec<CalendarEvent> = match query {
        Some(q) if !q.trim().is_empty() => store.search(q),
        _ => store.load(),
    };

    let output = match view {
        View::Month => render::render_month(date, &events),
        View::Week => render::render_week(date, &events),
        View::Day => render::render_day(date, &events),
    };

    println!("{output}");
    Ok(())
}
