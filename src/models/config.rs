//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative storage file names resolve against.
    pub data_dir: PathBuf,
    /// OMDb configuration.
    pub omdb: OmdbConfig,
    /// Website export configuration.
    pub website: WebsiteConfig,
}

/// OMDb configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL of the API.
    pub base_url: String,
}

/// Website export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    /// HTML template; the built-in template is used when unset.
    pub template: Option<PathBuf>,
    /// Where the generated page is written.
    pub output: PathBuf,
    /// Page title.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            omdb: OmdbConfig::default(),
            website: WebsiteConfig::default(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OMDB_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: "https://www.omdbapi.com/".to_string(),
        }
    }
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            template: None,
            output: PathBuf::from("index.html"),
            title: "My Movie App".to_string(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_shelf")
}

/// Path of the configuration file.
pub fn config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = config_path();

    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => return parse_config(&content),
            Err(e) => tracing::warn!("Failed to read {}: {}", config_path.display(), e),
        }
    }

    Config::default()
}

/// Parse configuration text, falling back to defaults when it is invalid.
pub fn parse_config(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(mut config) => {
            // The environment wins over an empty key in the file.
            if config.omdb.api_key.as_deref().map_or(true, str::is_empty) {
                config.omdb.api_key = OmdbConfig::default().api_key;
            }
            config
        }
        Err(e) => {
            tracing::warn!("Invalid config file, using defaults: {}", e);
            Config::default()
        }
    }
}
