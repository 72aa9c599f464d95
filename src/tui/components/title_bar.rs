// Title bar component
//
// Renders the app title with the translated caption of the current view.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name ("Viewdeck")
/// - Caption of the current view, in the active locale
/// - Crate version (right-aligned)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = match app.navigator.current() {
        Some(state) => {
            format!(
                " ⬢ Viewdeck ──── {} ",
                state.view.label_key().caption(app.locale)
            )
        }
        None => " ⬢ Viewdeck".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(
                    ratatui::text::Line::from(format!(" v{} ", VERSION)).right_aligned(),
                ),
        );

    f.render_widget(title, area);
}
