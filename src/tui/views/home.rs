// Home view - route directory
//
// The landing view lists every route in the sitemap with its translated
// caption. Enter navigates to the route under the cursor.

use crate::nav::Sitemap;
use crate::tui::app::App;
use crate::tui::layout::centered;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Action the home view hands back to the app
pub enum HomeAction {
    Navigate(String),
}

/// Cursor state for the route list
pub struct HomeView {
    pub cursor: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Handle a key, possibly producing an action for the app
    pub fn handle_key(&mut self, code: KeyCode, sitemap: &Sitemap) -> Option<HomeAction> {
        let count = sitemap.route_count();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = count.saturating_sub(1);
                None
            }
            KeyCode::Enter => sitemap
                .routes()
                .nth(self.cursor)
                .map(|route| HomeAction::Navigate(route.to_string())),
            _ => None,
        }
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

/// Main render function for the home view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let sitemap = app.navigator.sitemap();
    let height = sitemap.route_count() as u16 + 4;
    let area = centered(area, 64, height);

    let items: Vec<ListItem> = sitemap
        .routes()
        .enumerate()
        .map(|(i, route)| {
            let caption = sitemap
                .view_for(route)
                .map(|view| view.label_key().caption(app.locale))
                .unwrap_or("");

            let is_selected = i == app.views.home.cursor;
            let prefix = if is_selected { " ▸ " } else { "   " };
            let style = if is_selected {
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.field_value)
            };

            ListItem::new(format!("{}{:<28}{}", prefix, caption, route)).style(style)
        })
        .collect();

    let title = format!(" {} ", crate::i18n::LabelKey::Home.caption(app.locale));
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(title)
            .title_bottom(" ↑↓ move · ⏎ open "),
    );

    f.render_widget(list, area);
}
