// Sitemap build report view
//
// Scrollable text report produced when the sitemap was assembled.

use crate::i18n::LabelKey;
use crate::tui::app::App;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the report text
pub struct SitemapReportView {
    pub scroll: u16,
    /// Content rows visible last frame, drives page-sized jumps
    viewport: u16,
}

impl SitemapReportView {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            viewport: 0,
        }
    }

    /// Handle a key; `line_count` is the total number of report lines
    pub fn handle_key(&mut self, code: KeyCode, line_count: usize) {
        let page = self.viewport.max(1);
        let max = (line_count as u16).saturating_sub(page);

        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(max);
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(page);
            }
            KeyCode::PageDown => {
                self.scroll = (self.scroll + page).min(max);
            }
            KeyCode::Home => {
                self.scroll = 0;
            }
            KeyCode::End => {
                self.scroll = max;
            }
            _ => {}
        }
    }
}

impl Default for SitemapReportView {
    fn default() -> Self {
        Self::new()
    }
}

/// Main render function for the report view
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let report = app.navigator.sitemap().build_report();

    // Sync scroll bounds with the current viewport
    let viewport = area.height.saturating_sub(2);
    app.views.sitemap_report.viewport = viewport;
    let max = (report.len() as u16).saturating_sub(viewport.max(1));
    if app.views.sitemap_report.scroll > max {
        app.views.sitemap_report.scroll = max;
    }

    let lines: Vec<Line> = report
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default()
                    .fg(app.theme.title)
                    .add_modifier(Modifier::BOLD)
            } else if line.starts_with("--") {
                Style::default().fg(app.theme.highlight)
            } else {
                Style::default().fg(app.theme.field_value)
            };
            Line::styled(format!(" {}", line), style)
        })
        .collect();

    let title = format!(
        " {} ",
        LabelKey::SitemapBuildReport.caption(app.locale)
    );
    let paragraph = Paragraph::new(lines)
        .scroll((app.views.sitemap_report.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(title)
                .title_bottom(" ↑↓ scroll · ⌫ back "),
        );

    f.render_widget(paragraph, area);
}
