//! The `TaskList` component: task store, pending input, and event handlers.
//!
//! State lives in an immutable [`TaskListState`] snapshot. Each handler
//! builds the successor snapshot and swaps it in, so a renderer reading
//! [`TaskList::state`] always sees a consistent value.

use crate::TaskError;
use crate::ids::{Clock, IdAllocator, SystemClock};
use crate::task::{Task, TaskId, display_order};

/// Pending new-task input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Text the user is composing.
    pub text: String,
    /// Validation message from the last failed add, if any.
    pub error_message: Option<String>,
}

/// A snapshot of everything the component renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Pending input.
    pub draft: Draft,
}

impl TaskListState {
    /// Returns a copy with the draft text replaced.
    #[must_use]
    pub fn with_draft_text(&self, text: String) -> Self {
        Self {
            tasks: self.tasks.clone(),
            draft: Draft {
                text,
                error_message: self.draft.error_message.clone(),
            },
        }
    }

    /// Returns a copy with the validation message set.
    #[must_use]
    pub fn with_error(&self, message: String) -> Self {
        Self {
            tasks: self.tasks.clone(),
            draft: Draft {
                text: self.draft.text.clone(),
                error_message: Some(message),
            },
        }
    }

    /// Returns a copy with `task` appended and the draft cleared.
    #[must_use]
    pub fn with_task_added(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self {
            tasks,
            draft: Draft::default(),
        }
    }

    /// Returns a copy with the task's `done` flag flipped, or `None` if no
    /// task has `id`.
    #[must_use]
    pub fn with_task_toggled(&self, id: TaskId) -> Option<Self> {
        let pos = self.position(id)?;
        let mut tasks = self.tasks.clone();
        tasks[pos] = tasks[pos].toggled();
        Some(Self {
            tasks,
            draft: self.draft.clone(),
        })
    }

    /// Returns a copy without the task, paired with the removed task, or
    /// `None` if no task has `id`.
    #[must_use]
    pub fn without_task(&self, id: TaskId) -> Option<(Self, Task)> {
        let pos = self.position(id)?;
        let mut tasks = self.tasks.clone();
        let removed = tasks.remove(pos);
        Some((
            Self {
                tasks,
                draft: self.draft.clone(),
            },
            removed,
        ))
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// Capability asked to confirm a destructive action.
///
/// The host decides how to present the prompt. Closures of type
/// `FnMut(&str) -> bool` implement this directly.
pub trait Confirm {
    /// Presents `prompt` and returns whether the user accepted.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of [`TaskList::delete_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task was confirmed and removed.
    Deleted(Task),
    /// The user declined; nothing changed.
    Declined,
    /// No task had the given id; nothing changed and no prompt was shown.
    NotFound,
}

/// One mounted to-do list: the current snapshot plus id allocation.
#[derive(Debug, Clone)]
pub struct TaskList<C = SystemClock> {
    state: TaskListState,
    ids: IdAllocator<C>,
}

impl TaskList<SystemClock> {
    /// Creates an empty list with ids taken from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskList<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskList<C> {
    /// Creates an empty list with ids taken from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: TaskListState::default(),
            ids: IdAllocator::new(clock),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Pending input.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.state.draft
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.tasks.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.tasks.is_empty()
    }

    /// Number of tasks not yet done.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.tasks.iter().filter(|t| !t.done).count()
    }

    /// Tasks in display order (not-done first, stable).
    #[must_use]
    pub fn display_order(&self) -> Vec<&Task> {
        display_order(&self.state.tasks)
    }

    /// Replaces the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state = self.state.with_draft_text(text.into());
    }

    /// Commits the draft as a new task.
    ///
    /// A blank or whitespace-only draft leaves the store untouched and sets
    /// the draft's error message.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if the trimmed draft is empty.
    pub fn add_task(&mut self) -> Result<TaskId, TaskError> {
        if self.state.draft.text.trim().is_empty() {
            let err = TaskError::EmptyText;
            tracing::debug!("rejected blank task");
            self.state = self.state.with_error(err.to_string());
            return Err(err);
        }

        let id = self.ids.next_id();
        let task = Task::new(id, self.state.draft.text.clone());
        self.state = self.state.with_task_added(task);
        tracing::info!(task_id = %id, total = self.len(), "task added");
        Ok(id)
    }

    /// Flips the done flag of task `id`. Unknown ids are ignored.
    ///
    /// Returns whether a task was toggled.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        let Some(next) = self.state.with_task_toggled(id) else {
            tracing::debug!(task_id = %id, "toggle ignored, no such task");
            return false;
        };
        self.state = next;
        tracing::info!(task_id = %id, "task toggled");
        true
    }

    /// The confirmation prompt shown before deleting task `id`.
    #[must_use]
    pub fn delete_prompt(&self, id: TaskId) -> Option<String> {
        self.get(id)
            .map(|t| format!("Are you sure you want to delete \"{}\"?", t.text))
    }

    /// Deletes task `id` once `confirm` accepts.
    ///
    /// Unknown ids are a no-op and `confirm` is not consulted.
    pub fn delete_task(&mut self, id: TaskId, confirm: &mut impl Confirm) -> DeleteOutcome {
        let Some(prompt) = self.delete_prompt(id) else {
            tracing::debug!(task_id = %id, "delete ignored, no such task");
            return DeleteOutcome::NotFound;
        };
        if !confirm.confirm(&prompt) {
            tracing::debug!(task_id = %id, "delete declined");
            return DeleteOutcome::Declined;
        }

        let Some((next, removed)) = self.state.without_task(id) else {
            return DeleteOutcome::NotFound;
        };
        self.state = next;
        tracing::info!(task_id = %id, total = self.len(), "task deleted");
        DeleteOutcome::Deleted(removed)
    }
}
