// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Dog image API base URL and thumbnail batch parameters
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `DOG_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dog_gallery::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("thumbnails from {}", config.api.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Dog image API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Breed used for the thumbnail batch (`/breed/{breed}/images/random/{count}`).
    #[serde(default = "default_thumbnail_breed")]
    pub thumbnail_breed: String,

    #[serde(default = "default_thumbnail_count")]
    pub thumbnail_count: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            thumbnail_breed: default_thumbnail_breed(),
            thumbnail_count: default_thumbnail_count(),
        }
    }
}

impl ApiConfig {
    /// Thumbnail count clamped to what the API accepts.
    #[must_use]
    pub fn clamped_thumbnail_count(&self) -> u32 {
        self.thumbnail_count
            .clamp(MIN_THUMBNAIL_COUNT, MAX_THUMBNAIL_COUNT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_thumbnail_breed() -> String {
    DEFAULT_THUMBNAIL_BREED.to_string()
}

fn default_thumbnail_count() -> u32 {
    DEFAULT_THUMBNAIL_COUNT
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                thumbnail_breed: "beagle".to_string(),
                thumbnail_count: 4,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[api]\nthumbnail_breed = \"pug\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.api.thumbnail_breed, "pug");
        assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.api.thumbnail_count, DEFAULT_THUMBNAIL_COUNT);
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn default_config_targets_dog_ceo_hounds() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://dog.ceo/api");
        assert_eq!(config.api.thumbnail_breed, "hound");
        assert_eq!(config.api.thumbnail_count, 10);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn thumbnail_count_is_clamped() {
        let mut api = ApiConfig::default();
        api.thumbnail_count = 0;
        assert_eq!(api.clamped_thumbnail_count(), MIN_THUMBNAIL_COUNT);
        api.thumbnail_count = 500;
        assert_eq!(api.clamped_thumbnail_count(), MAX_THUMBNAIL_COUNT);
        api.thumbnail_count = 7;
        assert_eq!(api.clamped_thumbnail_count(), 7);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_file_is_found_by_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("nested").join("deeply");

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join("settings.toml")).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
