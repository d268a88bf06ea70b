//! Application state and event handling.
//!
//! `App` is the host for a [`TaskList`]: it owns focus, the draft cursor,
//! the list selection and the delete-confirmation modal, and turns key
//! events into calls on the list's handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{Clock, DeleteOutcome, SystemClock, Task, TaskId, TaskList};

use crate::config::AppConfig;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Draft input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
}

/// A delete waiting on the user's yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    /// Task the prompt is about.
    pub task_id: TaskId,
    /// Prompt text shown in the dialog.
    pub prompt: String,
}

/// Main application state.
#[derive(Debug)]
pub struct App<C = SystemClock> {
    /// The mounted to-do list.
    pub list: TaskList<C>,
    /// Cursor position in the draft (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in display order.
    pub selected_task: usize,
    /// Open confirmation dialog, if any.
    pub pending_delete: Option<PendingDelete>,
    /// Title shown above the list.
    pub heading: String,
    /// Creation-time display format (chrono).
    pub timestamp_format: String,
    /// Whether each task shows its creation time.
    pub show_timestamps: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application with an empty list and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Create an application using the display settings from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_list(config, TaskList::new())
    }
}

impl<C: Clock> App<C> {
    /// Create an application hosting `list`.
    pub fn with_list(config: &AppConfig, list: TaskList<C>) -> Self {
        Self {
            list,
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            pending_delete: None,
            heading: config.heading.clone(),
            timestamp_format: config.timestamp_format.clone(),
            show_timestamps: config.show_timestamps,
            should_quit: false,
        }
    }

    /// Current draft text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.list.draft().text
    }

    /// Tasks in the order they are shown.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.list.display_order()
    }

    /// Id of the selected task, if the list is non-empty.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected_task).map(|t| t.id)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The dialog swallows every key until answered.
        if self.pending_delete.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            // Control and Alt chords are not text.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input().chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.request_delete_selected(),
            KeyCode::Char('i') => self.focus = PanelFocus::Input,
            _ => {}
        }
    }

    /// Handle key event while the confirmation dialog is open.
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.resolve_delete(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.resolve_delete(false),
            _ => {}
        }
    }

    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Commit the draft. Focus returns to the input either way.
    fn submit_task(&mut self) {
        match self.list.add_task() {
            Ok(_) => self.cursor_position = 0,
            Err(e) => tracing::debug!(error = %e, "add rejected"),
        }
        self.focus = PanelFocus::Input;
    }

    /// Flip the selected task; the selection follows it to its new row.
    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if !self.list.toggle_task_done(id) {
            return;
        }
        let row = self.visible_tasks().iter().position(|t| t.id == id);
        if let Some(row) = row {
            self.selected_task = row;
        }
    }

    /// Open the confirmation dialog for the selected task.
    fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(prompt) = self.list.delete_prompt(id) {
            self.pending_delete = Some(PendingDelete {
                task_id: id,
                prompt,
            });
        }
    }

    /// Close the dialog, deleting the task if `accepted`.
    fn resolve_delete(&mut self, accepted: bool) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        let outcome = self
            .list
            .delete_task(pending.task_id, &mut |_: &str| accepted);
        if let DeleteOutcome::Deleted(task) = outcome {
            tracing::debug!(task_id = %task.id, "removed from view");
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected_task = self
            .selected_task
            .min(self.list.len().saturating_sub(1));
    }

    /// Byte offset of the given character index in the draft.
    fn byte_offset(&self, char_index: usize) -> usize {
        self.input()
            .char_indices()
            .nth(char_index)
            .map_or(self.input().len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let mut text = self.input().to_string();
        text.insert(self.byte_offset(self.cursor_position), c);
        self.list.set_draft(text);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let mut text = self.input().to_string();
        text.remove(self.byte_offset(self.cursor_position - 1));
        self.list.set_draft(text);
        self.cursor_position -= 1;
    }

    /// Delete the character under the cursor.
    fn delete_char_at(&mut self) {
        if self.cursor_position >= self.input().chars().count() {
            return;
        }
        let mut text = self.input().to_string();
        text.remove(self.byte_offset(self.cursor_position));
        self.list.set_draft(text);
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input().chars().count() {
            self.cursor_position += 1;
        }
    }

    const fn select_prev(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected_task < self.list.len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
