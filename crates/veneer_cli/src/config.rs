//! Veneer configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use veneer_core::{EventLogConfig, StateConfig, TransientConfig};

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "veneer.toml";

/// Top-level Veneer configuration (veneer.toml)
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VeneerConfig {
    #[serde(default)]
    pub event_log: EventLogConfig,
    #[serde(default)]
    pub transient: TransientConfig,
    #[serde(default)]
    pub driver: DriverConfig,
}

/// Frame loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DriverConfig {
    /// Timer ticks per second
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_fps() -> u32 {
    30
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl VeneerConfig {
    /// Load configuration from `path`, or from `./veneer.toml` if present.
    ///
    /// Falls back to defaults when no path is given and no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.validate()?;
        debug!("effective config:\n{}", config.to_toml()?);
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.state().validate().context("Invalid state configuration")?;
        if self.driver.fps == 0 {
            anyhow::bail!("driver.fps must be at least 1");
        }
        Ok(())
    }

    /// The part of the configuration handed to widgets
    pub fn state(&self) -> StateConfig {
        StateConfig {
            event_log: self.event_log.clone(),
            transient: self.transient.clone(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
