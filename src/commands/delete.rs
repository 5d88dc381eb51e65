use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

pub fn run(id: &str) -> Result<()> {
    let config = GlobalConfig::load()?;

    if config.store().delete(id)? {
        println!("{}", "  Event deleted".green());
        Ok(())
    } else {
        anyhow::bail!("No event with id '{}'", id)
    }
}
