use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;
use crate::render::Render;

pub fn run(query: &str) -> Result<()> {
    let config = GlobalConfig::load()?;
    let mut matches = config.store().search(query);

    if matches.is_empty() {
        println!("{}", format!("No events matching \"{query}\"").dimmed());
        return Ok(());
    }

    matches.sort_by_key(|event| event.start);

    for event in &matches {
        let date = event.start.date_naive().format("%Y-%m-%d").to_string();
        println!("  {} {}", date.dimmed(), event.render());
    }

    Ok(())
}
