//! Settings system for the weft framework.
//!
//! This module provides the [`Settings`] struct holding host-level
//! configuration, and [`LazySettings`], a globally-accessible,
//! once-configured settings instance. Settings can be loaded from a TOML
//! file; every field has a sensible default, so partial files are fine.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{WeftError, WeftResult};

/// Host configuration for a weft app.
///
/// # Examples
///
/// ```
/// use weft_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled. Debug mode switches logging to a
    /// human-readable format and surfaces script errors verbosely.
    pub debug: bool,
    /// The log level filter (e.g. "debug", "info", "warn", "error").
    pub log_level: String,
    /// The title shown for the app.
    pub app_title: String,
    /// Whether the persistent side panel is shown.
    pub show_side_panel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            app_title: "Weft app".to_string(),
            show_side_panel: true,
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string.
    pub fn from_toml_str(raw: &str) -> WeftResult<Self> {
        toml::from_str(raw).map_err(|err| WeftError::Config(err.to_string()))
    }

    /// Loads settings from a TOML file.
    pub fn from_toml(path: impl AsRef<Path>) -> WeftResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup; afterwards
/// [`get`](LazySettings::get) returns the configured settings, falling back
/// to defaults if configuration never happened.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the settings. Returns an error if already configured.
    pub fn configure(&self, settings: Settings) -> WeftResult<()> {
        self.inner
            .set(settings)
            .map_err(|_| WeftError::Config("settings are already configured".to_string()))
    }

    /// Returns the configured settings, or defaults if never configured.
    pub fn get(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
        assert!(settings.show_side_panel);
    }

    #[test]
    fn test_from_toml_str_partial() {
        let settings = Settings::from_toml_str("debug = false\nlog_level = \"warn\"").unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "warn");
        // Unspecified fields keep their defaults.
        assert_eq!(settings.app_title, "Weft app");
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = Settings::from_toml_str("debug = \"not a bool\"").unwrap_err();
        assert!(matches!(err, WeftError::Config(_)));
    }

    #[test]
    fn test_lazy_settings_configure_once() {
        let lazy = LazySettings::new();
        lazy.configure(Settings {
            app_title: "configured".to_string(),
            ..Settings::default()
        })
        .unwrap();
        assert_eq!(lazy.get().app_title, "configured");
        assert!(lazy.configure(Settings::default()).is_err());
    }

    #[test]
    fn test_lazy_settings_defaults_when_unconfigured() {
        let lazy = LazySettings::new();
        assert_eq!(lazy.get().log_level, "info");
    }
}
