// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: App name, current view caption, version
// - Status bar: Uptime, route, back target, key hints
//
// View-local components (button, choice list, log pane) are rendered by the
// views that own them. Each component is a focused, single-responsibility
// module.

pub mod button;
pub mod choice_list;
pub mod log_pane;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

// Re-export render functions for convenient access
// Usage: components::title_bar::render(f, area, app)
//    or: components::render_title(f, area, app)

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
