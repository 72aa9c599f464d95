// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Home: Route directory, the landing view
// - SystemAdmin: Dashboard grid with the report button and log tail
// - SitemapReport: Scrollable sitemap build report
// - Settings: The configuration form
//
// This module dispatches to the appropriate view based on the navigator.

pub mod home;
pub mod settings;
pub mod sitemap_report;
pub mod system_admin;

pub use home::{HomeAction, HomeView};
pub use settings::{SettingsAction, SettingsView};
pub use sitemap_report::SitemapReportView;

use crate::config::Config;
use crate::nav::{Sitemap, ViewKey};
use crate::tui::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Per-view UI state, owned by the app
pub struct Views {
    pub home: HomeView,
    pub sitemap_report: SitemapReportView,
    pub settings: SettingsView,
}

impl Views {
    pub fn new(config: &Config, sitemap: &Sitemap) -> Self {
        Self {
            home: HomeView::new(),
            sitemap_report: SitemapReportView::new(),
            settings: SettingsView::from_config(config, sitemap),
        }
    }
}

/// Main UI render function - called on every frame
///
/// Builds the shell layout (title bar, content, status bar), then dispatches
/// to the view the navigator currently points at.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    let view = app
        .navigator
        .current()
        .map(|state| state.view)
        .unwrap_or(ViewKey::Home);

    match view {
        ViewKey::Home => home::render(f, chunks[1], app),
        ViewKey::SystemAdmin => system_admin::render(f, chunks[1], app),
        ViewKey::SitemapReport => sitemap_report::render(f, chunks[1], app),
        ViewKey::Settings => settings::render(f, chunks[1], app),
    }

    components::render_status(f, chunks[2], app);

    // Toast notification renders on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
