//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::session;

/// Session persistence configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether to save and restore console state between runs
    pub enabled: bool,
    /// Location of the session file
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: session::session_path(),
        }
    }
}

/// Session settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSession {
    pub enabled: Option<bool>,
    pub path: Option<String>,
}

impl SessionConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSession>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            path: file.path.map(PathBuf::from).unwrap_or(defaults.path),
        }
    }
}
