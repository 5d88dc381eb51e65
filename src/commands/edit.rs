use agenda_core::EventPatch;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

pub fn run(
    id: &str,
    title: Option<String>,
    description: Option<String>,
    start: Option<String>,
    end: Option<String>,
    color: Option<String>,
    all_day: Option<bool>,
) -> Result<()> {
    let mut patch = EventPatch {
        title,
        description,
        color,
        all_day,
        ..EventPatch::default()
    };

    if let Some(s) = &start {
        patch.start = Some(super::new::parse_datetime(s)?.0);
    }
    if let Some(e) = &end {
        patch.end = Some(super::new::parse_datetime(e)?.0);
    }

    let config = GlobalConfig::load()?;

    match config.store().update(id, patch)? {
        Some(event) => {
            println!("{}", format!("  Updated: {}", event.title).green());
            Ok(())
        }
        None => anyhow::bail!("No event with id '{}'", id),
    }
}
