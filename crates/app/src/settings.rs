//! Handles settings for the application. Configuration is written in
//! `config/finquest.toml`; every value has a default so the file is
//! optional. Environment variables with the `FINQUEST` prefix and CLI
//! flags override the file.

use serde::Deserialize;

use crate::{cli::Cli, error::Result};

const DEFAULT_CONFIG_PATH: &str = "config/finquest";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the env filter (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Path of the JSON profile snapshot.
    pub path: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            path: "config/profile.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Leveling {
    /// Level cap; excess XP past the cap stays on the current level.
    pub max_level: u32,
}

impl Default for Leveling {
    fn default() -> Self {
        Self {
            max_level: engine::DEFAULT_MAX_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub profile: Profile,
    pub leveling: Leveling,
}

pub fn load(cli: &Cli) -> Result<Settings> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINQUEST").separator("__"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(profile) = &cli.profile {
        settings.profile.path = profile.clone();
    }
    if let Some(level) = &cli.log_level {
        settings.app.level = level.clone();
    }

    Ok(settings)
}
