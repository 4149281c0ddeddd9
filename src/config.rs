use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PetError, Result};

pub const DEFAULT_PET_NAME: &str = "Minnoş";
pub const PET_NAME_ENV: &str = "VPET_PET_NAME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pet_name: String,
    /// Seconds between decay ticks in a live session.
    pub tick_interval_secs: u64,
    /// How long the front end keeps a notification on screen.
    pub notification_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pet_name: DEFAULT_PET_NAME.to_string(),
            tick_interval_secs: 60,
            notification_ttl_secs: 5,
        }
    }
}

impl Config {
    /// `<config_dir>/vpet/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vpet").join("config.json"))
    }

    /// Load from `path`, falling back to the default location, then to
    /// built-in defaults when no file exists.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = match path.or_else(Self::default_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Config::default(),
        };

        if let Ok(name) = std::env::var(PET_NAME_ENV) {
            if !name.trim().is_empty() {
                config.pet_name = name;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            tracing::warn!("Config file {} is empty, using defaults", path.display());
            return Ok(Config::default());
        }

        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_secs == 0 {
            return Err(PetError::Config("tick_interval_secs must be positive".to_string()));
        }
        if self.notification_ttl_secs == 0 {
            return Err(PetError::Config("notification_ttl_secs must be positive".to_string()));
        }
        if self.pet_name.trim().is_empty() {
            return Err(PetError::Config("pet_name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.tick_interval_secs)
    }

    pub fn notification_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.notification_ttl_secs as i64)
    }
}
