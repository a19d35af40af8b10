//! Theme stylesheet loading.
//!
//! The embedded default CSS is copied to the user's config directory on
//! first run; after that the user-editable file is the source of truth,
//! read once at startup.

use std::fs;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during theme operations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Embedded default CSS template (compiled into the binary)
const DEFAULT_CSS: &str = include_str!("../assets/default_theme.css");

/// Initialize the theme file, copying the embedded template if it doesn't
/// exist. Returns the CSS content to use.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created or the file
/// cannot be read or written.
pub fn initialize_theme() -> Result<String, ThemeError> {
    let theme_path = songbingo_core::theme_path();

    if theme_path.exists() {
        info!("Loading theme from {:?}", theme_path);
        Ok(fs::read_to_string(&theme_path)?)
    } else {
        info!(
            "Theme file not found, creating from template at {:?}",
            theme_path
        );
        let config_dir = songbingo_core::config_dir();
        fs::create_dir_all(&config_dir)?;
        fs::write(&theme_path, DEFAULT_CSS)?;
        Ok(DEFAULT_CSS.to_string())
    }
}

/// Load the theme CSS, falling back to the embedded template if the user
/// file cannot be initialized or read.
#[must_use]
pub fn load_theme_css() -> String {
    match initialize_theme() {
        Ok(css) => css,
        Err(e) => {
            warn!("Failed to load theme file, using embedded CSS: {}", e);
            DEFAULT_CSS.to_string()
        }
    }
}
