//! Core state and event handlers for the `Tasklist` to-do component.
//!
//! Everything here is terminal-agnostic: the host application feeds user
//! actions into a [`TaskList`] and re-renders from its current snapshot.

pub mod ids;
pub mod list;
pub mod task;

pub use ids::{Clock, IdAllocator, SystemClock};
pub use list::{Confirm, DeleteOutcome, Draft, TaskList, TaskListState};
pub use task::{Task, TaskId, display_order};

use thiserror::Error;

/// Errors returned by task list handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The draft was empty or whitespace-only when an add was attempted.
    #[error("Task cannot be empty.")]
    EmptyText,
}
