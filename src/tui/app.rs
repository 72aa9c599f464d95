// TUI application state
//
// This module manages the state of the TUI application: the navigator, the
// active theme and locale, the per-view UI state, and the session channel.

use super::components::Toast;
use super::input::InputHandler;
use super::views::Views;
use crate::config::Config;
use crate::i18n::{DescriptionKey, Locale};
use crate::logging::LogBuffer;
use crate::nav::{Navigator, ViewKey};
use crate::session::Session;
use crate::theme::Theme;
use std::time::Instant;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// Active configuration (mutated when the settings form is applied)
    pub config: Config,

    /// Active color theme
    pub theme: Theme,

    /// Active locale for captions and descriptions
    pub locale: Locale,

    /// Route resolution and navigation history
    pub navigator: Navigator,

    /// Per-view UI state
    pub views: Views,

    /// Log buffer for the admin log pane
    pub log_buffer: LogBuffer,

    /// Current toast notification, if any
    pub toast: Option<Toast>,

    /// Channel to the session writer task
    session_tx: mpsc::Sender<Session>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,
}

impl App {
    pub fn with_config(
        config: Config,
        navigator: Navigator,
        log_buffer: LogBuffer,
        session_tx: mpsc::Sender<Session>,
    ) -> Self {
        let theme = Theme::by_name(&config.theme);
        let locale = Locale::from_tag(&config.locale);
        let views = Views::new(&config, navigator.sitemap());

        Self {
            config,
            theme,
            locale,
            navigator,
            views,
            log_buffer,
            toast: None,
            session_tx,
            input_handler: InputHandler::default(),
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Navigate to a route. Rejections keep the current view and surface
    /// the reason as a toast.
    pub fn navigate(&mut self, route: &str) {
        match self.navigator.navigate_to(route) {
            Ok(()) => self.snapshot_session(),
            Err(e) => {
                tracing::warn!(error = %e, "navigation rejected");
                self.show_toast(Toast::error(format!("✗ {}", e)));
            }
        }
    }

    /// Return to the previous route, if there is one
    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.snapshot_session();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────

    /// Apply the settings form to the running config: swap theme and locale
    /// live, persist the config file, and snapshot the session.
    pub fn apply_settings(&mut self) {
        let theme_name = self.views.settings.theme.get();
        let locale_tag = self.views.settings.locale.get();
        let (theme_name, locale_tag) = match (theme_name, locale_tag) {
            (Ok(theme), Ok(locale)) => (theme, locale),
            (Err(e), _) | (_, Err(e)) => {
                self.show_toast(Toast::error(format!("✗ {}", e)));
                return;
            }
        };
        let start_route = self
            .views
            .settings
            .start_route
            .holder()
            .selected()
            .ok()
            .cloned();

        self.config.theme = theme_name;
        self.config.locale = locale_tag;
        self.config.start_route = start_route;

        self.theme = Theme::by_name(&self.config.theme);
        self.locale = Locale::from_tag(&self.config.locale);

        match self.config.save() {
            Ok(()) => {
                self.views.settings.dirty = false;
                tracing::info!(
                    theme = %self.config.theme,
                    locale = %self.config.locale,
                    "settings applied"
                );
                self.show_toast(Toast::info("✓ Settings applied"));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save config");
                self.show_toast(Toast::error("✗ Failed to save config"));
            }
        }

        self.snapshot_session();
    }

    /// Adopt the start route from a restored session, unless the config
    /// already pins one or the saved route no longer exists.
    pub fn restore_session_form(&mut self, session: &Session) {
        if self.config.start_route.is_some() {
            return;
        }
        if let Ok(route) = session.start_route.get() {
            if self.navigator.sitemap().view_for(&route).is_some() {
                self.views.settings.start_route.set(route);
            } else {
                tracing::warn!(route = %route, "saved start route no longer exists");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session persistence
    // ─────────────────────────────────────────────────────────────────────

    /// Send the current session state to the writer task.
    ///
    /// Dropping a snapshot on a full channel is fine, the next navigation
    /// sends a fresh one.
    pub fn snapshot_session(&mut self) {
        if !self.config.session.enabled {
            return;
        }
        let route = match self.navigator.current() {
            Some(state) => state.route.clone(),
            None => return,
        };
        let session = Session::new(route, self.views.settings.start_route.clone());
        if let Err(e) = self.session_tx.try_send(session) {
            tracing::warn!(error = %e, "session snapshot dropped");
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────────────

    /// Show a toast notification
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Clear the toast if it has expired
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handle key press with configured behavior (returns true if action should trigger)
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Status bar data
    // ─────────────────────────────────────────────────────────────────────

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    /// Translated description of the focused widget, for the status bar
    pub fn focused_description(&self) -> Option<&'static str> {
        match self.navigator.current().map(|state| state.view) {
            Some(ViewKey::Settings) => Some(
                self.views
                    .settings
                    .focused_description()
                    .description(self.locale),
            ),
            Some(ViewKey::SitemapReport) => {
                Some(DescriptionKey::SitemapBuildReport.description(self.locale))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Sitemap, ROUTE_SETTINGS, ROUTE_SITEMAP_REPORT};

    fn test_app() -> App {
        let sitemap = Sitemap::standard().unwrap();
        let mut navigator = Navigator::new(sitemap);
        navigator.navigate_to("home").unwrap();
        let (tx, _rx) = mpsc::channel(8);
        let mut config = Config::default();
        config.session.enabled = false;
        // Tests must never touch the user's real config file.
        config.path = None;
        App::with_config(config, navigator, LogBuffer::new(), tx)
    }

    #[test]
    fn navigate_updates_state_and_back_returns() {
        let mut app = test_app();
        app.navigate(ROUTE_SETTINGS);
        assert_eq!(app.navigator.current().unwrap().route, ROUTE_SETTINGS);
        assert!(app.toast.is_none());

        app.go_back();
        assert_eq!(app.navigator.current().unwrap().route, "home");
    }

    #[test]
    fn navigate_to_unknown_route_stays_put_and_toasts() {
        let mut app = test_app();
        app.navigate("no-such-route");
        assert_eq!(app.navigator.current().unwrap().route, "home");
        assert!(app.toast.is_some());
    }

    #[test]
    fn apply_settings_swaps_theme_and_locale_live() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut app = test_app();
        app.config.path = Some(config_path.clone());
        app.views.settings.theme.set("nord".to_string());
        app.views.settings.locale.set("de".to_string());
        app.views.settings.dirty = true;

        app.apply_settings();

        assert_eq!(app.theme.name, "nord");
        assert_eq!(app.locale, Locale::De);
        assert_eq!(app.config.theme, "nord");
        assert!(!app.views.settings.dirty);

        // Persistence lands at the injected path, never the user's file.
        let saved = std::fs::read_to_string(&config_path).unwrap();
        assert!(saved.contains("theme = \"nord\""));
        assert!(saved.contains("locale = \"de\""));
    }

    #[test]
    fn restore_session_form_prefers_config_start_route() {
        let mut app = test_app();
        app.config.start_route = Some(ROUTE_SITEMAP_REPORT.to_string());

        let mut saved_property = app.views.settings.start_route.clone();
        saved_property.set(ROUTE_SETTINGS.to_string());
        let saved = Session::new("home", saved_property);
        app.restore_session_form(&saved);

        // Config pins the start route, the session must not override it
        assert!(!app.views.settings.start_route.holder().has_value());
    }

    #[test]
    fn restore_session_form_adopts_saved_route_when_config_is_silent() {
        let mut app = test_app();
        let mut saved_property = app.views.settings.start_route.clone();
        saved_property.set(ROUTE_SETTINGS.to_string());
        let saved = Session::new("home", saved_property);

        app.restore_session_form(&saved);

        assert_eq!(
            app.views.settings.start_route.get(),
            Ok(ROUTE_SETTINGS.to_string())
        );
    }

    #[test]
    fn focused_description_follows_the_view() {
        let mut app = test_app();
        assert!(app.focused_description().is_none());

        app.navigate(ROUTE_SETTINGS);
        assert!(app.focused_description().is_some());
    }
}
