// Log pane component
//
// Renders the tail of the shared log buffer with color-coded levels.

use crate::logging::{LogBuffer, LogEntry};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the most recent log entries that fit in `area`
///
/// Newest entries sit at the bottom, like a terminal. Entries are colored
/// by severity via the active theme.
pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let entries = buffer.entries();
    let height = area.height.saturating_sub(2) as usize;

    let start = entries.len().saturating_sub(height);

    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry))
                .style(Style::default().fg(theme.level_color(entry.level)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Recent Log ─ c clears "),
    );

    f.render_widget(list, area);
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}
