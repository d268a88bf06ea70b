//! Draft input box and inline validation error.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist_core::Clock;

use super::theme;
use crate::app::{App, PanelFocus};

/// Placeholder shown while the draft is empty and unfocused.
pub const PLACEHOLDER: &str = "Add a new task";

/// Render the input box.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == PanelFocus::Input;

    let input_line = if app.input().is_empty() && !is_focused {
        Line::from(Span::styled(PLACEHOLDER, theme::dimmed()))
    } else if is_focused {
        // Split around the cursor so it can sit inside multibyte text, and
        // drop leading chars once the cursor would pass the right border.
        let width = usize::from(area.width.saturating_sub(2)).max(1);
        let scroll = (app.cursor_position + 1).saturating_sub(width);
        let before: String = app
            .input()
            .chars()
            .skip(scroll)
            .take(app.cursor_position - scroll)
            .collect();
        let after: String = app.input().chars().skip(app.cursor_position).collect();
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::bold()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(app.input(), theme::normal()))
    };

    let block = Block::default()
        .title("Input")
        .title_bottom(Line::from(Span::styled(" Enter: Add ", theme::dimmed())).right_aligned())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Render the validation error line, if any.
pub fn render_error<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let Some(message) = &app.list.draft().error_message else {
        return;
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(message.as_str(), theme::error())));
    frame.render_widget(paragraph, area);
}
