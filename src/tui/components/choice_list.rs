// Choice list component
//
// Renders a select property as a label plus its permitted values in a row,
// with the current selection bracketed. An empty selection shows "(none)",
// which only fields that allow deselection can reach.

use crate::form::SelectProperty;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one select property as a single line of choices
pub fn render(
    f: &mut Frame,
    area: Rect,
    label: &str,
    property: &SelectProperty<String>,
    theme: &Theme,
    focused: bool,
) {
    let label_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    let marker = if focused { "▸" } else { " " };
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {} {:<12}", marker, label),
        label_style,
    )];

    let current = property.holder().selected().ok();

    for value in property.holder().data_provider().items() {
        if current == Some(value) {
            spans.push(Span::styled(
                format!(" [{}] ", value),
                Style::default()
                    .fg(theme.field_value)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {}  ", value),
                Style::default().fg(theme.muted),
            ));
        }
    }

    if !property.holder().has_value() {
        spans.push(Span::styled(" (none)", Style::default().fg(theme.warn)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
