//! Delete confirmation popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

/// Render a centered yes/no dialog showing `prompt`.
pub fn render(frame: &mut Frame, area: Rect, prompt: &str) {
    let popup = centered(area, 60, 6);

    let text = vec![
        Line::from(Span::styled(prompt, theme::normal())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y]", theme::highlighted()),
            Span::raw(" Yes   "),
            Span::styled("[n]", theme::highlighted()),
            Span::raw(" No"),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(" Confirm ", theme::error()))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rect of at most `percent_x`% width and `height` rows, centered in `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
