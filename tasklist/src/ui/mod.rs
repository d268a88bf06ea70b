//! Terminal UI rendering.

pub mod confirm_dialog;
pub mod input_panel;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::Span,
    widgets::{Block, Borders},
};
use tasklist_core::Clock;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    // Status bar at bottom, everything else inside the heading block
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let outer = Block::default()
        .title(Span::styled(
            format!(" {} ", app.heading),
            theme::panel_title(theme::HEADING_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());
    let content_area = outer.inner(main_chunks[0]);
    frame.render_widget(outer, main_chunks[0]);

    // The error row only exists while there is an error to show
    let error_rows = u16::from(app.list.draft().error_message.is_some());
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Input
            Constraint::Length(error_rows), // Error line
            Constraint::Min(1),             // Tasks
        ])
        .split(content_area);

    input_panel::render(frame, content_chunks[0], app);
    input_panel::render_error(frame, content_chunks[1], app);
    task_panel::render(frame, content_chunks[2], app);
    status_bar::render(frame, main_chunks[1], app);

    if let Some(pending) = &app.pending_delete {
        let area = frame.area();
        confirm_dialog::render(frame, area, &pending.prompt);
    }
}
