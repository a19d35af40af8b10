//! Path constants for configuration and persisted state files.

use std::path::PathBuf;

/// The name of the configuration directory under ~/.config/
pub const CONFIG_DIR_NAME: &str = "songbingo";

/// The name of the main configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// The name of the directory holding persisted selection records
pub const SELECTION_STATE_DIR_NAME: &str = "state";

/// The name of the theme stylesheet file
pub const THEME_FILE_NAME: &str = "theme.css";

/// The name of the log file written when file logging is enabled
pub const LOG_FILE_NAME: &str = "songbingo.log";

/// Get the configuration directory path (~/.config/songbingo/)
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(CONFIG_DIR_NAME)
}

/// Get the config file path (~/.config/songbingo/config.toml)
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Get the directory holding persisted selection records
/// (`~/.config/songbingo/state/`)
#[must_use]
pub fn selection_state_dir() -> PathBuf {
    config_dir().join(SELECTION_STATE_DIR_NAME)
}

/// Get the theme stylesheet path (`~/.config/songbingo/theme.css`)
#[must_use]
pub fn theme_path() -> PathBuf {
    config_dir().join(THEME_FILE_NAME)
}

/// Get the log file path (`~/.config/songbingo/songbingo.log`)
#[must_use]
pub fn log_file_path() -> PathBuf {
    config_dir().join(LOG_FILE_NAME)
}
