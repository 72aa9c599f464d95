//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# viewdeck configuration

# Theme: auto, dracula, nord, gruvbox
# "auto" uses the terminal's ANSI palette
theme = "{theme}"

# Locale for captions: en, de
locale = "{locale}"

# Route opened at startup. When unset, the saved session (or home) is used.
{start_route}
# UI tick interval in milliseconds
tick_ms = {tick_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Session persistence (last route, start-route selection)
[session]
enabled = {session_enabled}
path = "{session_path}"
"#,
            theme = self.theme,
            locale = self.locale,
            start_route = self
                .start_route
                .as_ref()
                .map(|r| format!("start_route = \"{}\"", r))
                .unwrap_or_else(|| "# start_route = \"home\"".to_string()),
            tick_ms = self.tick_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            session_enabled = self.session.enabled,
            session_path = self.session.path.display(),
        )
    }

    /// Save current configuration to the configured path
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = &self.path else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml())
    }
}
