// Settings view - the configuration form
//
// Three single-select fields: theme, locale and start route. Left/Right
// cycles the focused field through its permitted values, Enter applies the
// form to the running config, x clears the focused field, r resets the form
// back to the active config.

use crate::config::Config;
use crate::form::{SelectProperty, SingleSelect, SingleSelectError};
use crate::i18n::{DescriptionKey, LabelKey, Locale};
use crate::nav::Sitemap;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::choice_list;
use crate::tui::layout::centered;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields of the settings form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Theme,
    Locale,
    StartRoute,
}

impl SettingsField {
    const ORDER: [SettingsField; 3] = [Self::Theme, Self::Locale, Self::StartRoute];

    pub fn label_key(&self) -> LabelKey {
        match self {
            Self::Theme => LabelKey::Theme,
            Self::Locale => LabelKey::Locale,
            Self::StartRoute => LabelKey::StartRoute,
        }
    }

    pub fn description_key(&self) -> DescriptionKey {
        match self {
            Self::Theme => DescriptionKey::Theme,
            Self::Locale => DescriptionKey::Locale,
            Self::StartRoute => DescriptionKey::StartRoute,
        }
    }

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Action the settings view hands back to the app
pub enum SettingsAction {
    /// Enter pressed: apply the form to the running config
    Apply,
    /// A clear attempt was refused by the named field's deselection policy
    DeselectRejected(String, SingleSelectError),
}

/// The settings form: three select properties plus focus and dirty state
pub struct SettingsView {
    pub theme: SelectProperty<String>,
    pub locale: SelectProperty<String>,
    pub start_route: SelectProperty<String>,
    pub focus: SettingsField,
    pub dirty: bool,
}

impl SettingsView {
    /// Build the form from the active config and the live sitemap
    pub fn from_config(config: &Config, sitemap: &Sitemap) -> Self {
        let mut theme = SelectProperty::new(
            "theme",
            SingleSelect::new(Theme::available().map(String::from)),
        );
        theme.set(config.theme.clone());

        let mut locale = SelectProperty::new(
            "locale",
            SingleSelect::new(Locale::available().map(String::from)),
        );
        locale.set(config.locale.clone());

        let routes: Vec<String> = sitemap.routes().map(String::from).collect();
        let mut start_route =
            SelectProperty::new("start-route", SingleSelect::with_deselection(routes));
        if let Some(route) = &config.start_route {
            start_route.set(route.clone());
        }

        Self {
            theme,
            locale,
            start_route,
            focus: SettingsField::Theme,
            dirty: false,
        }
    }

    /// Drop unapplied edits and rebuild field values from the config
    pub fn reset(&mut self, config: &Config) {
        if self.start_route.holder().allow_deselection() {
            // A config without a start route must reset edits back to empty
            let _ = self.start_route.holder_mut().clear();
        }
        if let Some(route) = &config.start_route {
            self.start_route.set(route.clone());
        }

        self.theme.set(config.theme.clone());
        self.locale.set(config.locale.clone());
        self.focus = SettingsField::Theme;
        self.dirty = false;
    }

    /// Description key of the focused field, for the status bar
    pub fn focused_description(&self) -> DescriptionKey {
        self.focus.description_key()
    }

    /// Handle a key, possibly producing an action for the app
    pub fn handle_key(&mut self, code: KeyCode) -> Option<SettingsAction> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(1);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cycle(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cycle(1);
                None
            }
            KeyCode::Char('x') => {
                let property = self.focused_property_mut();
                match property.holder_mut().deselect() {
                    Ok(()) => {
                        self.dirty = true;
                        None
                    }
                    Err(e) => Some(SettingsAction::DeselectRejected(
                        property.name().to_string(),
                        e,
                    )),
                }
            }
            KeyCode::Enter => Some(SettingsAction::Apply),
            _ => None,
        }
    }

    fn move_focus(&mut self, step: isize) {
        let len = SettingsField::ORDER.len() as isize;
        let next = (self.focus.position() as isize + step).rem_euclid(len) as usize;
        self.focus = SettingsField::ORDER[next];
    }

    /// Step the focused field through its permitted values, wrapping around.
    /// An empty field starts at the first (or last) value.
    fn cycle(&mut self, step: isize) {
        let property = self.focused_property_mut();
        let provider = property.holder().data_provider();
        if provider.is_empty() {
            return;
        }
        let len = provider.len();

        let next = match property
            .holder()
            .selected()
            .ok()
            .and_then(|v| provider.index_of(v))
        {
            Some(idx) => (idx as isize + step).rem_euclid(len as isize) as usize,
            None if step < 0 => len - 1,
            None => 0,
        };

        let value = provider.items()[next].clone();
        property.set(value);
        self.dirty = true;
    }

    fn focused_property_mut(&mut self) -> &mut SelectProperty<String> {
        match self.focus {
            SettingsField::Theme => &mut self.theme,
            SettingsField::Locale => &mut self.locale,
            SettingsField::StartRoute => &mut self.start_route,
        }
    }
}

/// Main render function for the settings view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.views.settings;
    let area = centered(area, 76, 11);

    let title = format!(" {} ", LabelKey::Settings.caption(app.locale));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(title)
        .title_bottom(" ◂ ▸ change · ⏎ apply · x clear · r reset ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // theme
            Constraint::Length(1),
            Constraint::Length(1), // locale
            Constraint::Length(1),
            Constraint::Length(1), // start route
            Constraint::Length(1),
            Constraint::Length(1), // dirty marker
        ])
        .split(inner);

    let fields = [
        (&view.theme, SettingsField::Theme, rows[1]),
        (&view.locale, SettingsField::Locale, rows[3]),
        (&view.start_route, SettingsField::StartRoute, rows[5]),
    ];

    for (property, field, row) in fields {
        choice_list::render(
            f,
            row,
            field.label_key().caption(app.locale),
            property,
            &app.theme,
            view.focus == field,
        );
    }

    if view.dirty {
        let marker = Paragraph::new(" ● unapplied changes")
            .style(Style::default().fg(app.theme.warn));
        f.render_widget(marker, rows[7]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> SettingsView {
        let sitemap = Sitemap::standard().unwrap();
        SettingsView::from_config(&Config::default(), &sitemap)
    }

    #[test]
    fn cycling_wraps_and_marks_the_form_dirty() {
        let mut view = view();
        assert_eq!(view.theme.get(), Ok("auto".to_string()));
        assert!(!view.dirty);

        view.handle_key(KeyCode::Right);
        assert_eq!(view.theme.get(), Ok("dracula".to_string()));
        assert!(view.dirty);

        // Two steps left from "dracula" wraps past "auto" to the end
        view.handle_key(KeyCode::Left);
        view.handle_key(KeyCode::Left);
        assert_eq!(view.theme.get(), Ok("gruvbox".to_string()));
    }

    #[test]
    fn start_route_clears_but_required_fields_refuse() {
        let mut view = view();
        view.handle_key(KeyCode::Down);
        view.handle_key(KeyCode::Down);
        assert_eq!(view.focus, SettingsField::StartRoute);

        view.handle_key(KeyCode::Right);
        assert!(view.start_route.holder().has_value());
        assert!(view.handle_key(KeyCode::Char('x')).is_none());
        assert!(!view.start_route.holder().has_value());

        view.handle_key(KeyCode::Up);
        view.handle_key(KeyCode::Up);
        assert_eq!(view.focus, SettingsField::Theme);
        match view.handle_key(KeyCode::Char('x')) {
            Some(SettingsAction::DeselectRejected(field, e)) => {
                assert_eq!(field, "theme");
                assert_eq!(e, SingleSelectError::DeselectionNotAllowed);
            }
            _ => panic!("expected the clear to be rejected"),
        }
        assert_eq!(view.theme.get(), Ok("auto".to_string()));
    }

    #[test]
    fn reset_restores_the_active_config() {
        let mut view = view();
        view.handle_key(KeyCode::Right);
        view.handle_key(KeyCode::Down);
        view.handle_key(KeyCode::Right);
        view.handle_key(KeyCode::Down);
        view.handle_key(KeyCode::Right);
        assert!(view.dirty);
        assert!(view.start_route.holder().has_value());

        view.reset(&Config::default());
        assert_eq!(view.theme.get(), Ok("auto".to_string()));
        assert_eq!(view.locale.get(), Ok("en".to_string()));
        assert!(!view.start_route.holder().has_value());
        assert_eq!(view.focus, SettingsField::Theme);
        assert!(!view.dirty);
    }

    #[test]
    fn enter_requests_apply() {
        let mut view = view();
        assert!(matches!(
            view.handle_key(KeyCode::Enter),
            Some(SettingsAction::Apply)
        ));
    }
}
