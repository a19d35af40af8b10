use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongbingoConfig {
    #[serde(default)]
    pub songbook: SongbookConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongbookConfig {
    /// Optional path to a custom songbook JSON file; empty uses the
    /// built-in list
    #[serde(default)]
    pub path: String,
}

impl SongbookConfig {
    /// The override songbook path, if one is configured
    #[must_use]
    pub fn override_path(&self) -> Option<PathBuf> {
        if self.path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_heading")]
    pub heading: String,
    /// How long each countdown digit is held, in milliseconds
    #[serde(default = "default_tick_duration")]
    pub tick_duration_ms: u64,
    /// How long a toast notice stays visible, in milliseconds
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

fn default_heading() -> String {
    "SONG BINGO".to_string()
}

const fn default_tick_duration() -> u64 {
    1200
}

const fn default_toast_duration() -> u64 {
    3000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            tick_duration_ms: default_tick_duration(),
            toast_duration_ms: default_toast_duration(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

const fn default_window_width() -> u32 {
    1024
}

const fn default_window_height() -> u32 {
    768
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl SongbingoConfig {
    /// Get the configuration directory path (~/.config/songbingo/)
    #[must_use]
    pub fn config_dir() -> PathBuf {
        crate::paths::config_dir()
    }

    /// Get the config file path (~/.config/songbingo/config.toml)
    #[must_use]
    pub fn config_path() -> PathBuf {
        crate::paths::config_path()
    }

    /// Load config from file, writing the commented template on first run.
    ///
    /// Every field has a default, so a freshly created template yields a
    /// fully usable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed, or if the template cannot be written on first run.
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&config_path, CONFIG_TEMPLATE)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

const CONFIG_TEMPLATE: &str = r##"# Songbingo Configuration
# ~/.config/songbingo/config.toml

[songbook]
# Optional: path to a custom songbook JSON file.
# Format: [{ "id": "<video id>", "title": "...", "chorus_time": <seconds> }, ...]
# Leave empty to use the built-in songbook.
path = ""

[ui]
heading = "SONG BINGO"
# How long each countdown digit is held (milliseconds)
tick_duration_ms = 1200
# How long success/error notices stay visible (milliseconds)
toast_duration_ms = 3000

[window]
width = 1024
height = 768

[logging]
# Write logs to ~/.config/songbingo/songbingo.log in addition to stderr
enabled = false
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses() {
        let config: SongbingoConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.ui.heading, "SONG BINGO");
        assert_eq!(config.ui.tick_duration_ms, 1200);
        assert!(!config.logging.enabled);
        assert!(config.songbook.override_path().is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SongbingoConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.heading, "SONG BINGO");
        assert_eq!(config.ui.tick_duration_ms, 1200);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let config: SongbingoConfig = toml::from_str(
            r#"
            [ui]
            heading = "KARAOKE NIGHT"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.heading, "KARAOKE NIGHT");
        assert_eq!(config.ui.tick_duration_ms, 1200);
    }

    #[test]
    fn test_songbook_override_path() {
        let config: SongbingoConfig = toml::from_str(
            r#"
            [songbook]
            path = "/tmp/setlist.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.songbook.override_path(),
            Some(PathBuf::from("/tmp/setlist.json"))
        );
    }
}
