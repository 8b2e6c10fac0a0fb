// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The `[feed]` table is the single well-known location for the pub/sub
//! connection parameters. Its absence is not an error: the application then
//! runs with notifications disabled.
//!
//! # Examples
//!
//! ```no_run
//! use toasty::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load(None).unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toasty";
const CONFIG_DIR_ENV: &str = "TOASTY_CONFIG_DIR";

/// Connection and auth parameters for the notification feed.
///
/// Written once at startup from the `[feed]` table and handed to the
/// subscription layer by value; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Broker hostname or IP.
    pub host: String,
    #[serde(default = "default_feed_port")]
    pub port: u16,
    /// Channel (topic) delivering notification events.
    pub channel: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Client identifier presented to the broker. Defaults to a
    /// process-unique id when absent.
    #[serde(default)]
    pub client_id: Option<String>,
}

fn default_feed_port() -> u16 {
    defaults::DEFAULT_FEED_PORT
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Overrides the severity-based display duration for records that do
    /// not carry their own.
    #[serde(default)]
    pub display_duration_secs: Option<u64>,
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub feed: Option<FeedConfig>,
}

fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            // A corrupt file behaves like a missing one: defaults, feed disabled.
            log::warn!("ignoring unreadable config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_feed() -> FeedConfig {
        FeedConfig {
            host: "broker.example.net".to_string(),
            port: 1884,
            channel: "alerts".to_string(),
            username: Some("toasty".to_string()),
            password: Some("hunter2".to_string()),
            client_id: None,
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
            display_duration_secs: Some(8),
            max_visible: Some(5),
            feed: Some(sample_feed()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.display_duration_secs, Some(8));
        assert_eq!(loaded.max_visible, Some(5));
        assert_eq!(loaded.feed, Some(sample_feed()));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not valid { toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert!(loaded.language.is_none());
        assert!(loaded.feed.is_none());
    }

    #[test]
    fn load_with_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load(Some(temp_dir.path())).expect("load should not fail");
        assert!(loaded.feed.is_none());
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn feed_port_defaults_when_absent() {
        let toml_str = r#"
            [feed]
            host = "localhost"
            channel = "test"
        "#;
        let config: Config = toml::from_str(toml_str).expect("parse failed");
        let feed = config.feed.expect("feed should be present");
        assert_eq!(feed.port, defaults::DEFAULT_FEED_PORT);
        assert!(feed.username.is_none());
    }

    #[test]
    fn partial_config_accepts_missing_feed_table() {
        let config: Config = toml::from_str("language = \"en-US\"").expect("parse failed");
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert!(config.feed.is_none());
    }
}
