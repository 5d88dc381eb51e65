use agenda_core::EventDraft;
use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

pub fn run(
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let interactive = title.is_none() || start.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Start ---
    let (start_time, all_day) = if let Some(s) = start {
        parse_datetime(&s)?
    } else {
        prompt_with_retry("  When? (2026-03-20 or 2026-03-20T15:00)")?
    };

    // --- End ---
    let end_time = if let Some(end_input) = end {
        parse_datetime(&end_input)?.0
    } else if interactive {
        prompt_end(start_time, all_day)?
    } else {
        default_end(start_time, all_day)
    };

    // --- Description ---
    let description = if let Some(d) = description {
        d
    } else if interactive {
        Input::new()
            .with_prompt("  Notes? (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?
    } else {
        String::new()
    };

    let color = color.or_else(|| config.default_color.clone());

    let event = config.store().create(EventDraft {
        title,
        description,
        start: start_time,
        end: end_time,
        color,
        all_day,
    })?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} [{}]", event.title, event.id).green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry(prompt: &str) -> Result<(DateTime<Local>, bool)> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_datetime(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for the end, defaulting to `default_end` when skipped.
fn prompt_end(start: DateTime<Local>, all_day: bool) -> Result<DateTime<Local>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Until? (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;

        if input.is_empty() {
            return Ok(default_end(start, all_day));
        }
        match parse_datetime(&input) {
            Ok((end, _)) => return Ok(end),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Parse a date/time argument.
///
/// `YYYY-MM-DDTHH:MM` (or with a space) gives a timed instant; a bare
/// `YYYY-MM-DD` is taken as all-day, anchored at local midnight —
/// a date without a time means the whole day.
pub(crate) fn parse_datetime(input: &str) -> Result<(DateTime<Local>, bool)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M") {
        return Ok((local_instant(dt)?, false));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok((local_instant(dt)?, false));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok((local_instant(date.and_time(NaiveTime::MIN))?, true));
    }

    anyhow::bail!(
        "Could not parse date/time: \"{}\". Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
        input
    )
}

fn local_instant(dt: NaiveDateTime) -> Result<DateTime<Local>> {
    Local
        .from_local_datetime(&dt)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("Not a valid local time: {}", dt))
}

/// Default end: one hour after a timed start, the start day itself for
/// all-day events.
fn default_end(start: DateTime<Local>, all_day: bool) -> DateTime<Local> {
    if all_day {
        start
    } else {
        start + Duration::hours(1)
    }
}
