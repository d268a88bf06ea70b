//! Task records and the derived display order.

/// Unique identifier for a task.
///
/// Derived from the wall-clock time (milliseconds since the Unix epoch) at
/// creation, bumped past the previous id when the clock has not advanced.
/// See [`IdAllocator`](crate::IdAllocator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw millisecond value.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Text as typed by the user (not trimmed).
    pub text: String,
    /// Whether the task has been marked done.
    pub done: bool,
}

impl Task {
    /// Creates a new, not-done task.
    #[must_use]
    pub const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }

    /// Returns a copy of this task with `done` negated.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// Orders tasks for display: every not-done task before every done task,
/// keeping insertion order within each group.
#[must_use]
pub fn display_order(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.done)
        .chain(tasks.iter().filter(|t| t.done))
        .collect()
}
