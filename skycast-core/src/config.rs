use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// WeatherAPI.com endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Built-in API key; a config file may replace it.
pub const DEFAULT_API_KEY: &str = "52ca0b29cf85492499e42049231511";

/// Location shown on startup until the user checks another one.
pub const DEFAULT_LOCATION: &str = "London";

/// Runtime configuration, read once at startup.
///
/// A config file is optional: first runs get the embedded defaults, and a
/// partial file overrides only the fields it names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub default_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
