// SPDX-License-Identifier: MPL-2.0
//! User settings stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "en-US"
//! theme_mode = "dark"      # light | dark | system
//!
//! [boot]
//! health_check_url = "https://example.com/api/health"
//! splash_asset = "embedded:projects/theforge-desktop.png"
//! minimum_duration_ms = 2400
//! tip_rotation_ms = 5000
//!
//! [contact]
//! endpoint = "https://example.com/api/contact"
//! ```
//!
//! Every key is optional. A file that cannot be parsed is ignored as a
//! whole: the app starts on defaults and shows a warning toast. The file
//! location is resolved by [`paths::config_dir`].

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::AssetRef;
use crate::boot::{BootSettings, BootTimings};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Boot screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BootConfig {
    /// URL probed to decide whether the backend is reachable.
    #[serde(
        default = "default_health_check_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_check_url: Option<String>,

    /// Image preloaded during boot (`embedded:<name>`, a path, or a URL).
    #[serde(
        default = "default_splash_asset",
        skip_serializing_if = "Option::is_none"
    )]
    pub splash_asset: Option<String>,

    /// Minimum time before the boot screen announces readiness (ms).
    #[serde(
        default = "default_minimum_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_duration_ms: Option<u64>,

    /// Interval between tips (ms).
    #[serde(
        default = "default_tip_rotation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tip_rotation_ms: Option<u64>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            health_check_url: default_health_check_url(),
            splash_asset: default_splash_asset(),
            minimum_duration_ms: default_minimum_duration_ms(),
            tip_rotation_ms: default_tip_rotation_ms(),
        }
    }
}

impl BootConfig {
    /// Resolves the pipeline settings, clamping out-of-range values.
    #[must_use]
    pub fn settings(&self) -> BootSettings {
        let minimum_ms = self
            .minimum_duration_ms
            .unwrap_or(DEFAULT_MINIMUM_DURATION_MS)
            .clamp(MIN_MINIMUM_DURATION_MS, MAX_MINIMUM_DURATION_MS);
        BootSettings {
            health_check_url: non_blank(self.health_check_url.as_deref())
                .unwrap_or(DEFAULT_HEALTH_CHECK_URL)
                .to_string(),
            splash_asset: AssetRef::parse(
                non_blank(self.splash_asset.as_deref()).unwrap_or(DEFAULT_SPLASH_ASSET),
            ),
            minimum_duration: Duration::from_millis(minimum_ms),
            timings: BootTimings::default(),
        }
    }

    /// Resolves the tip rotation interval, clamped to its allowed range.
    #[must_use]
    pub fn tip_rotation(&self) -> Duration {
        Duration::from_millis(
            self.tip_rotation_ms
                .unwrap_or(DEFAULT_TIP_ROTATION_MS)
                .clamp(MIN_TIP_ROTATION_MS, MAX_TIP_ROTATION_MS),
        )
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Endpoint receiving form submissions.
    #[serde(
        default = "default_contact_endpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
        }
    }
}

impl ContactConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        non_blank(self.endpoint.as_deref()).unwrap_or(DEFAULT_CONTACT_ENDPOINT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Boot screen settings.
    #[serde(default)]
    pub boot: BootConfig,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::default()
}

fn default_health_check_url() -> Option<String> {
    Some(DEFAULT_HEALTH_CHECK_URL.to_string())
}

fn default_splash_asset() -> Option<String> {
    Some(DEFAULT_SPLASH_ASSET.to_string())
}

fn default_minimum_duration_ms() -> Option<u64> {
    Some(DEFAULT_MINIMUM_DURATION_MS)
}

fn default_tip_rotation_ms() -> Option<u64> {
    Some(DEFAULT_TIP_ROTATION_MS)
}

fn default_contact_endpoint() -> Option<String> {
    Some(DEFAULT_CONTACT_ENDPOINT.to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Accepts `theme_mode` in any letter case.
fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}

// =============================================================================
// Reading and Writing
// =============================================================================

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads the settings from the resolved config directory.
///
/// See [`load_with_override`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Reads the settings from `base_dir`, or the resolved config directory.
///
/// A missing file silently yields defaults. An unreadable one yields
/// defaults plus the i18n key of the warning to show.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|path| path.is_file()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => {
            log::debug!("Loaded settings from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring {}: {err}", path.display());
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

/// Writes the settings to `base_dir`, or the resolved config directory.
/// Does nothing when no directory can be resolved.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            log::warn!("No config directory available; settings not saved");
            Ok(())
        }
    }
}

/// Writes the settings to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let serialized = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialized)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            boot: BootConfig {
                health_check_url: Some("http://localhost:5000/api/contact".to_string()),
                splash_asset: Some("/srv/splash.png".to_string()),
                minimum_duration_ms: Some(1200),
                tip_rotation_ms: Some(3000),
            },
            contact: ContactConfig {
                endpoint: Some("http://localhost:5000/api/contact".to_string()),
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
        fs::write(&config_path, "[general\ntheme_mode = ").expect("write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn load_with_override_invalid_toml_returns_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write");

        let config = load_from_path(&config_path).expect("partial config loads");

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.boot, BootConfig::default());
        assert_eq!(config.contact.endpoint(), DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn boot_settings_clamp_and_parse() {
        let boot = BootConfig {
            health_check_url: Some("   ".to_string()),
            splash_asset: Some("https://cdn.example.com/splash.webp".to_string()),
            minimum_duration_ms: Some(999_999),
            tip_rotation_ms: Some(10),
        };

        let settings = boot.settings();

        assert_eq!(settings.health_check_url, DEFAULT_HEALTH_CHECK_URL);
        assert_eq!(
            settings.splash_asset,
            AssetRef::Remote("https://cdn.example.com/splash.webp".to_string())
        );
        assert_eq!(
            settings.minimum_duration,
            Duration::from_millis(MAX_MINIMUM_DURATION_MS)
        );
        assert_eq!(
            boot.tip_rotation(),
            Duration::from_millis(MIN_TIP_ROTATION_MS)
        );
    }

    #[test]
    fn default_boot_settings_match_defaults() {
        let settings = BootConfig::default().settings();
        assert_eq!(settings.minimum_duration, Duration::from_millis(2400));
        assert_eq!(
            settings.splash_asset,
            AssetRef::Embedded("projects/theforge-desktop.png".to_string())
        );
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
