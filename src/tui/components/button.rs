// Button component
//
// A bordered action button with a translated caption. The border and text
// brighten when the button is focused.

use crate::i18n::{LabelKey, Locale};
use crate::theme::Theme;
use crate::util::fit_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a button with the caption for `label` in the active locale
pub fn render(
    f: &mut Frame,
    area: Rect,
    label: LabelKey,
    theme: &Theme,
    locale: Locale,
    focused: bool,
) {
    let caption = fit_to_width(label.caption(locale), area.width.saturating_sub(4) as usize);

    let text_style = if focused {
        Style::default()
            .fg(theme.button_focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.button)
    };

    let button = Paragraph::new(caption)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.cell_border(focused))),
        );

    f.render_widget(button, area);
}
