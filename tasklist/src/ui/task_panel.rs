//! Task list rendering.

use std::fmt::Write;

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tasklist_core::Clock;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list in display order.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let items: Vec<ListItem> = app
        .visible_tasks()
        .into_iter()
        .map(|task| {
            let checkbox = if task.done { "[x]" } else { "[ ]" };
            let style = if task.done {
                theme::done_task()
            } else {
                theme::normal()
            };

            let mut spans = vec![Span::styled(checkbox, theme::normal()), Span::raw(" ")];
            if app.show_timestamps {
                spans.push(Span::styled(
                    format_created_at(task.id.as_millis(), &app.timestamp_format),
                    theme::timestamp(),
                ));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(task.text.clone(), style));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let hint = if is_focused {
        " Space: toggle | d: Delete "
    } else {
        ""
    };

    let block = Block::default()
        .title("Tasks")
        .title_bottom(Line::from(Span::styled(hint, theme::dimmed())).right_aligned())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected());

    let mut state = ListState::default();
    if is_focused && !app.list.is_empty() {
        state.select(Some(app.selected_task));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

const UNKNOWN_TIME: &str = "??:??";

/// Format an epoch-millisecond task id as a local time.
///
/// Falls back to `??:??` when the time is out of range or `format` has a
/// specifier chrono cannot render.
fn format_created_at(ms: u64, format: &str) -> String {
    let Ok(ms) = i64::try_from(ms) else {
        return UNKNOWN_TIME.to_string();
    };
    let chrono::LocalResult::Single(dt) = Local.timestamp_millis_opt(ms) else {
        return UNKNOWN_TIME.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_err() {
        return UNKNOWN_TIME.to_string();
    }
    out
}
