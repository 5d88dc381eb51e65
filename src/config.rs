use std::path::{Path, PathBuf};

use agenda_core::{EventStore, FileSlot};
use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_DATA_FILE: &str = "~/.local/share/agenda/calendar-events.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Global configuration at ~/.config/agenda/config.toml
///
/// `data_file` is the storage slot holding the serialized event
/// collection; `default_color` is applied to events created without an
/// explicit color.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    pub default_color: Option<String>,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Invalid config at {}", config_path.display()))
    }

    /// The slot path with `~` expanded to the home directory.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Open the event store over the configured slot.
    pub fn store(&self) -> EventStore<FileSlot> {
        EventStore::new(FileSlot::new(self.data_path()))
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# agenda configuration

# Where the event collection is stored:
# data_file = \"{DEFAULT_DATA_FILE}\"

# Color for events created without one:
# default_color = \"#3b82f6\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;

        Ok(())
    }
}
