//! Configuration for the admin console
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/viewdeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod persistence;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use persistence::{FileSession, SessionConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Locale tag for captions: "en", "de"
    pub locale: String,

    /// Route opened at startup; when unset the saved session (or home) wins
    pub start_route: Option<String>,

    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// UI tick interval in milliseconds
    pub tick_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Session persistence configuration
    pub session: SessionConfig,

    /// Where [`Config::save`] writes the config file. None when no home
    /// directory could be determined; tests point this at a scratch dir.
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            locale: "en".to_string(),
            start_route: None,
            enable_tui: true,
            tick_ms: 250,
            logging: LoggingConfig::default(),
            session: SessionConfig::default(),
            path: Self::config_path(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub locale: Option<String>,
    pub start_route: Option<String>,
    pub tick_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [session] section
    pub session: Option<FileSession>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Abort with a readable message about a broken config file.
///
/// A present-but-invalid config fails fast instead of silently falling back
/// to defaults, so the user debugs the file rather than the wrong behavior.
fn config_fatal(path: &std::path::Path, what: &str, err: &dyn std::fmt::Display) -> ! {
    eprintln!();
    eprintln!("config error: {}", what);
    eprintln!("  file : {}", path.display());
    eprintln!("  error: {}", err);
    eprintln!();
    eprintln!("Fix the file, or delete it and restart viewdeck to regenerate defaults.");
    eprintln!("(`viewdeck config --reset` does the same.)");
    std::process::exit(1);
}

impl Config {
    /// Get the config file path: ~/.config/viewdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("viewdeck").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists; a present-but-unreadable file is fatal
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => config_fatal(&path, "could not parse config file", &e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // No config file - run on defaults
                FileConfig::default()
            }
            Err(e) => config_fatal(&path, "could not read config file", &e),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default
        let theme = std::env::var("VIEWDECK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "auto".to_string());

        // Locale: env > file > default
        let locale = std::env::var("VIEWDECK_LOCALE")
            .ok()
            .or(file.locale)
            .unwrap_or_else(|| "en".to_string());

        // Start route: env > file > unset (saved session or home wins)
        let start_route = std::env::var("VIEWDECK_START_ROUTE")
            .ok()
            .or(file.start_route);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("VIEWDECK_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Tick interval: env > file > default
        let tick_ms = std::env::var("VIEWDECK_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.tick_ms)
            .unwrap_or(250);

        // Subconfig loading with from_file() helpers
        let logging = LoggingConfig::from_file(file.logging);
        let session = SessionConfig::from_file(file.session);

        Self {
            theme,
            locale,
            start_route,
            enable_tui,
            tick_ms,
            logging,
            session,
            path: Self::config_path(),
        }
    }
}
