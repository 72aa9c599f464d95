// System admin view - 3x3 dashboard grid
//
// The centre cell is the gateway button to the sitemap build report. The top
// corners carry session and navigation cards, the bottom row shows the
// recent log tail. The remaining cells are empty frames.

use crate::config::VERSION;
use crate::i18n::LabelKey;
use crate::tui::app::App;
use crate::tui::components::{button, log_pane};
use crate::tui::layout::{centered, grid3, GRID_CENTRE};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main render function for the system admin view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cells = grid3(area);

    render_session_card(f, cells[0], app);
    render_navigation_card(f, cells[2], app);

    // Empty frame cells keep the grid readable
    for idx in [1, 3, 5] {
        let frame = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.muted));
        f.render_widget(frame, cells[idx]);
    }

    // Centre: the report button, the only interactive element here
    let cell = cells[GRID_CENTRE];
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.cell_border(true)));
    f.render_widget(frame, cell);

    let button_area = centered(cell, cell.width.saturating_sub(4), 3);
    button::render(
        f,
        button_area,
        LabelKey::SitemapBuildReport,
        &app.theme,
        app.locale,
        true,
    );

    // Bottom row merged into one full-width log pane
    let bottom = Rect {
        x: cells[6].x,
        y: cells[6].y,
        width: area.width,
        height: cells[6].height,
    };
    log_pane::render(f, bottom, &app.log_buffer, &app.theme);
}

fn render_session_card(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        card_line("version", format!("v{}", VERSION), app),
        card_line("uptime", app.uptime(), app),
        card_line("theme", app.theme.name.clone(), app),
        card_line("locale", app.locale.tag().to_string(), app),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Session "),
    );
    f.render_widget(card, area);
}

fn render_navigation_card(f: &mut Frame, area: Rect, app: &App) {
    let current = app
        .navigator
        .current()
        .map(|s| s.route.clone())
        .unwrap_or_else(|| "-".to_string());
    let previous = app
        .navigator
        .previous()
        .map(|s| s.route.clone())
        .unwrap_or_else(|| "-".to_string());
    let sitemap = app.navigator.sitemap();

    let lines = vec![
        card_line("route", current, app),
        card_line("previous", previous, app),
        card_line("routes", sitemap.route_count().to_string(), app),
        card_line("redirects", sitemap.redirect_count().to_string(), app),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Navigation "),
    );
    f.render_widget(card, area);
}

fn card_line(label: &str, value: String, app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<10}", label),
            Style::default().fg(app.theme.muted),
        ),
        Span::styled(value, Style::default().fg(app.theme.field_value)),
    ])
}
