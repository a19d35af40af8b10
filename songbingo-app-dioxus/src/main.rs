mod app;
mod components;
mod state;
mod theme;

use crate::app::App;
use crate::state::{
    PickerGeneration, SelectionNamespace, SelectionSignals, ToastState, SELECTED_SONGS_KEY,
};
use dioxus::desktop::{LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use songbingo_core::{
    namespace_key, CoreError, Songbook, SongbingoConfig, TomlParseError, UiConfig,
};
use std::fs::File;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "Songbingo";

/// Built-in songbook, used when no override path is configured
const DEFAULT_SONGBOOK_JSON: &str = include_str!("../assets/songs.json");
const DEFAULT_SONGBOOK_SLUG: &str = "songs";

fn main() {
    // Initialize logging with optional file output
    // Check config for logging.enabled before full config load
    let file_logging_enabled = check_file_logging_enabled();
    init_tracing(file_logging_enabled);

    // Load config or create template on first run; every field has a
    // default, so a parse failure degrades to defaults after warning
    let config = match SongbingoConfig::load_or_create() {
        Ok(config) => config,
        Err(CoreError::ConfigParseError(parse_error)) => {
            show_config_parse_error_dialog(&parse_error);
            SongbingoConfig::default()
        }
        Err(e) => {
            error!("Failed to load config, continuing with defaults: {e}");
            SongbingoConfig::default()
        }
    };

    // Load the songbook; a malformed songbook is fatal
    let songbook = match load_songbook(&config) {
        Ok(songbook) => songbook,
        Err(e) => {
            error!("{e}");
            show_songbook_error_dialog(&e.to_string());
            std::process::exit(1);
        }
    };
    info!(
        "Loaded songbook '{}' with {} song(s)",
        songbook.source_slug(),
        songbook.len()
    );

    // Selection state is scoped to the songbook identity, so two
    // different songbooks never share drawn state
    let namespace = namespace_key(
        &format!("/{}", songbook.source_slug()),
        SELECTED_SONGS_KEY,
    );

    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        ));

    let dioxus_config = dioxus::desktop::Config::default()
        .with_window(window)
        .with_disable_context_menu(true);

    // Launch Dioxus application
    // Use with_context to inject the songbook, UI config, and namespace
    dioxus::LaunchBuilder::desktop()
        .with_cfg(dioxus_config)
        .with_context(Arc::new(songbook))
        .with_context(config.ui)
        .with_context(SelectionNamespace(namespace))
        .launch(root);
}

/// Root component that sets up shared state and renders the app
fn root() -> Element {
    let ui = use_context::<UiConfig>();
    let namespace = use_context::<SelectionNamespace>();

    use_context_provider(|| SelectionSignals::new(&namespace.0));
    use_context_provider(|| ToastState::new(ui.toast_duration_ms));
    use_context_provider(PickerGeneration::new);

    let css = use_signal(theme::load_theme_css);

    rsx! {
        document::Title { "{APP_NAME}" },
        style { "{css}" },
        App {}
    }
}

/// Load the songbook from the configured override path or the built-in list
fn load_songbook(config: &SongbingoConfig) -> Result<Songbook, CoreError> {
    match config.songbook.override_path() {
        Some(path) => {
            info!("Loading songbook from {:?}", path);
            Songbook::load_from_file(&path)
        }
        None => Songbook::from_json(DEFAULT_SONGBOOK_JSON, DEFAULT_SONGBOOK_SLUG),
    }
}

/// Show dialog when the config file has TOML parsing errors; the app
/// continues with default settings either way
fn show_config_parse_error_dialog(parse_error: &TomlParseError) {
    let config_path = SongbingoConfig::config_path();
    let message = format!(
        "Your configuration file has a syntax error; default settings will be used.\n\n\
        Error: {parse_error}\n\n\
        File: {}",
        config_path.display()
    );

    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Songbingo - Configuration Error")
        .set_description(&message)
        .set_buttons(MessageButtons::OkCancelCustom(
            "Open Config".into(),
            "Continue".into(),
        ))
        .show();

    if matches!(result, MessageDialogResult::Custom(ref s) if s == "Open Config") {
        if let Err(e) = open::that(&config_path) {
            error!("Failed to open config file: {e}");
        }
    }
}

/// Show a fatal error dialog for an unloadable songbook
fn show_songbook_error_dialog(error_message: &str) {
    let message = format!(
        "The songbook could not be loaded:\n\n{error_message}\n\n\
        Check the songbook path in your configuration file."
    );

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Songbingo - Songbook Error")
        .set_description(&message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Check if file logging is enabled by reading the config file.
/// This is done before full config loading to set up tracing first.
/// Returns `false` if config doesn't exist or can't be parsed.
fn check_file_logging_enabled() -> bool {
    // Minimal structs to parse just the logging.enabled field
    #[derive(serde::Deserialize)]
    struct PartialConfig {
        #[serde(default)]
        logging: PartialLoggingConfig,
    }
    #[derive(serde::Deserialize, Default)]
    struct PartialLoggingConfig {
        #[serde(default)]
        enabled: bool,
    }

    let config_path = SongbingoConfig::config_path();
    let Ok(content) = std::fs::read_to_string(&config_path) else {
        return false;
    };

    toml::from_str::<PartialConfig>(&content)
        .map(|c| c.logging.enabled)
        .unwrap_or(false)
}

/// Initialize tracing with console output and optional file logging
fn init_tracing(file_logging_enabled: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer();

    if file_logging_enabled {
        let log_path = songbingo_core::log_file_path();

        // Create config directory if needed
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match File::create(&log_path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .with(file_layer)
                    .init();

                return;
            }
            Err(e) => {
                eprintln!("Failed to create log file at {}: {e}", log_path.display());
            }
        }
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_songbook_parses() {
        // from_json also enforces id uniqueness
        let book = Songbook::from_json(DEFAULT_SONGBOOK_JSON, DEFAULT_SONGBOOK_SLUG).unwrap();
        assert!(!book.is_empty());
    }
}
