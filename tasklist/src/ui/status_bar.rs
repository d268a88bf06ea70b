//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist_core::Clock;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let help_text = if app.pending_delete.is_some() {
        "y/Enter: delete | n/Esc: cancel"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
            PanelFocus::Tasks => {
                "Tab: switch panel | ↑↓/jk: navigate | Space: toggle | d: delete | Esc: quit"
            }
        }
    };

    let status_line = Line::from(vec![
        Span::styled(
            concat!("Tasklist v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::raw(format!(
            "{} of {} remaining",
            app.list.remaining(),
            app.list.len()
        )),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
