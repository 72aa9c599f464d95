// Status bar component
//
// Renders session info at the bottom: uptime, current route, back target,
// and the focused field's description when there is room.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::util::fit_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Compact: uptime and route only
/// - Normal: adds back target and core key hints
/// - Wide: adds the focused field's translated description
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let route = app
        .navigator
        .current()
        .map(|s| s.route.as_str())
        .unwrap_or("-");

    let back = match app.navigator.previous() {
        Some(prev) => format!(" │ ⌫ {}", prev.route),
        None => String::new(),
    };

    let status_text = if !bp.at_least(Breakpoint::Normal) {
        // Compact format for narrow terminals
        format!(" {} │ ◈ {}", app.uptime(), route)
    } else if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ ◈ {}{} │ Tab views · q quit",
            app.uptime(),
            route,
            back,
        )
    } else {
        // Full format with the focused field description, if any
        let description = match app.focused_description() {
            Some(text) => format!(" │ {}", text),
            None => String::new(),
        };

        format!(
            " {} │ ◈ {}{} │ Tab views · ⏎ select · q quit{}",
            app.uptime(),
            route,
            back,
            description,
        )
    };

    let status_text = fit_to_width(&status_text, area.width.saturating_sub(1) as usize);

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
