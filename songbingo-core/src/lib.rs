pub mod config;
pub mod error;
pub mod paths;
pub mod picker;
pub mod selection;
pub mod song;
pub mod store;

pub use config::{LoggingConfig, SongbingoConfig, SongbookConfig, UiConfig, WindowConfig};
pub use error::CoreError;
pub use paths::{
    config_dir, config_path, log_file_path, selection_state_dir, theme_path, CONFIG_DIR_NAME,
    CONFIG_FILE_NAME, LOG_FILE_NAME, SELECTION_STATE_DIR_NAME, THEME_FILE_NAME,
};
pub use picker::{PickerPhase, PickerRun, COUNTDOWN_START};
pub use song::{Song, Songbook};
pub use store::{namespace_key, SelectionStore};

/// Re-export toml error type for config parsing error handling
pub use toml::de::Error as TomlParseError;
