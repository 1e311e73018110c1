use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.toml";

/// User preferences. Missing fields in the file fall back to the defaults,
/// so hand-edited partial files keep working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Preferred background hex, shown first by the palette listing.
    #[serde(default = "default_preferred_background")]
    pub preferred_background: String,

    /// Whether educational tips are enabled.
    #[serde(default = "default_show_educational_tips")]
    pub show_educational_tips: bool,
}

fn default_preferred_background() -> String {
    "#ae2d27".to_string()
}

fn default_show_educational_tips() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferred_background: default_preferred_background(),
            show_educational_tips: default_show_educational_tips(),
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        LocalStorage::config_path(CONFIG_FILE)
    }

    /// Loads the preferences, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(path) = Self::get_path()
            && path.exists()
            && let Ok(content) = fs::read_to_string(&path)
            && let Ok(config) = toml::from_str(&content)
        {
            return config;
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::get_path() {
            let toml_string = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_string)?;
            tracing::debug!("preferences saved");
        }
        Ok(())
    }

    /// Restores both preferences to their defaults and persists the result.
    pub fn reset() -> Result<()> {
        Self::default().save()
    }
}
