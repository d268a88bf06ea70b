//! Rendering tests against ratatui's `TestBackend`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tasklist::app::App;
use tasklist::config::AppConfig;
use tasklist::ui;
use tasklist_core::{Clock, TaskList};

// 2021-07-01T12:00:00Z, the same month in every timezone.
const JULY_2021_MS: u64 = 1_625_140_800_000;

fn press<C: Clock>(app: &mut App<C>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn add<C: Clock>(app: &mut App<C>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

/// Draws `app` into an 80x20 buffer and returns its rows.
fn render<C: Clock>(app: &App<C>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen<C: Clock>(app: &App<C>) -> String {
    render(app).join("\n")
}

fn row_of(rows: &[String], needle: &str) -> usize {
    rows.iter()
        .position(|r| r.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not on screen"))
}

fn quiet_app() -> App {
    App::from_config(&AppConfig {
        show_timestamps: false,
        ..AppConfig::default()
    })
}

#[test]
fn empty_app_shows_heading_and_status() {
    let app = quiet_app();
    let text = screen(&app);
    assert!(text.contains("Todo List"));
    assert!(text.contains("0 of 0 remaining"));
    assert!(!text.contains("Task cannot be empty."));
}

#[test]
fn placeholder_shown_when_input_unfocused() {
    let mut app = quiet_app();
    press(&mut app, KeyCode::Tab);
    assert!(screen(&app).contains("Add a new task"));
}

#[test]
fn error_line_appears_after_blank_add() {
    let mut app = quiet_app();
    press(&mut app, KeyCode::Enter);
    assert!(screen(&app).contains("Task cannot be empty."));
}

#[test]
fn tasks_render_with_checkboxes_in_display_order() {
    let mut app = quiet_app();
    add(&mut app, "Buy milk");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    add(&mut app, "Buy eggs");

    let rows = render(&app);
    let eggs = row_of(&rows, "[ ] Buy eggs");
    let milk = row_of(&rows, "[x] Buy milk");
    assert!(eggs < milk);
    assert!(rows.join("\n").contains("1 of 2 remaining"));
}

#[test]
fn confirmation_dialog_renders_prompt() {
    let mut app = quiet_app();
    add(&mut app, "Buy eggs");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));

    let text = screen(&app);
    assert!(text.contains("Confirm"));
    assert!(text.contains("Are you sure"));
    assert!(text.contains("[y] Yes"));
}

#[test]
fn custom_heading_from_config() {
    let app = App::from_config(&AppConfig {
        heading: "Groceries".to_string(),
        ..AppConfig::default()
    });
    assert!(screen(&app).contains("Groceries"));
}

/// App with a fixed clock, so every task is created in July 2021.
fn clocked_app(timestamp_format: &str) -> App<impl Clock> {
    let config = AppConfig {
        timestamp_format: timestamp_format.to_string(),
        ..AppConfig::default()
    };
    App::with_list(&config, TaskList::with_clock(|| JULY_2021_MS))
}

#[test]
fn creation_time_rendered_with_configured_format() {
    let mut app = clocked_app("%Y-%m");
    add(&mut app, "Buy milk");
    assert!(screen(&app).contains("[ ] 2021-07 Buy milk"));
}

#[test]
fn unrenderable_timestamp_format_falls_back() {
    let mut app = clocked_app("%Q");
    add(&mut app, "Buy milk");
    assert!(screen(&app).contains("[ ] ??:?? Buy milk"));
}

#[test]
fn hide_timestamps_omits_creation_time() {
    let mut app = clocked_app("%Y-%m");
    app.show_timestamps = false;
    add(&mut app, "Buy milk");
    let text = screen(&app);
    assert!(text.contains("[ ] Buy milk"));
    assert!(!text.contains("2021-07"));
}

#[test]
fn long_draft_keeps_cursor_visible() {
    let mut app = quiet_app();
    for _ in 0..100 {
        press(&mut app, KeyCode::Char('x'));
    }
    for c in "END".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert!(screen(&app).contains("xxEND█"));

    // Back at the start the head of the draft is shown again.
    press(&mut app, KeyCode::Home);
    let rows = render(&app);
    let row = row_of(&rows, "█");
    assert!(rows[row].contains("│█xxx"));
}
