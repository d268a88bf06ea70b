//! Property-based tests for the `TaskList` handlers.
//!
//! Uses proptest to verify:
//! 1. Store size equals the number of non-blank adds; blank adds never
//!    create a task and always leave an error message.
//! 2. Toggling a task twice restores the original state.
//! 3. A confirmed delete removes exactly the targeted task.
//! 4. Display order puts every not-done task before every done task and
//!    keeps insertion order within each group.
//! 5. Ids stay unique under any sequence of operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use tasklist_core::{DeleteOutcome, Task, TaskId, TaskList, display_order};

/// A user action against the list.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize, bool),
}

/// Strategy for draft text, mixing blank and non-blank inputs.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[a-zA-Z0-9 ]{0,3}[a-zA-Z0-9][a-zA-Z0-9 ]{0,12}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => (any::<usize>(), any::<bool>()).prop_map(|(i, yes)| Op::Delete(i, yes)),
    ]
}

/// Picks an existing id by index, or a fresh unknown id when the list is empty.
fn pick(list: &TaskList, index: usize) -> TaskId {
    let tasks = list.tasks();
    if tasks.is_empty() {
        TaskId::from_millis(0)
    } else {
        tasks[index % tasks.len()].id
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

proptest! {
    #[test]
    fn store_size_counts_non_blank_adds(texts in prop::collection::vec(arb_text(), 0..40)) {
        let mut list = TaskList::new();
        let mut expected = 0;
        for text in &texts {
            list.set_draft(text.clone());
            let before = list.len();
            let result = list.add_task();
            if is_blank(text) {
                prop_assert!(result.is_err());
                prop_assert_eq!(list.len(), before);
                let msg = list.draft().error_message.clone().unwrap_or_default();
                prop_assert!(!msg.is_empty());
            } else {
                expected += 1;
                prop_assert!(result.is_ok());
                prop_assert!(list.draft().error_message.is_none());
                prop_assert!(list.draft().text.is_empty());
            }
            prop_assert_eq!(list.len(), expected);
        }
        prop_assert!(list.tasks().iter().all(|t| !is_blank(&t.text)));
    }

    #[test]
    fn toggle_twice_is_identity(texts in prop::collection::vec("[a-z]{1,8}", 1..10), index in any::<usize>()) {
        let mut list = TaskList::new();
        for text in &texts {
            list.set_draft(text.clone());
            list.add_task().unwrap();
        }
        let id = pick(&list, index);
        let before = list.state().clone();
        list.toggle_task_done(id);
        list.toggle_task_done(id);
        prop_assert_eq!(list.state(), &before);
    }

    #[test]
    fn confirmed_delete_removes_exactly_one(texts in prop::collection::vec("[a-z]{1,8}", 1..10), index in any::<usize>()) {
        let mut list = TaskList::new();
        for text in &texts {
            list.set_draft(text.clone());
            list.add_task().unwrap();
        }
        let id = pick(&list, index);
        let expected: Vec<Task> = list.tasks().iter().filter(|t| t.id != id).cloned().collect();
        let outcome = list.delete_task(id, &mut |_: &str| true);
        prop_assert!(matches!(outcome, DeleteOutcome::Deleted(ref t) if t.id == id));
        prop_assert_eq!(list.tasks(), expected.as_slice());
    }

    #[test]
    fn display_order_is_stable_partition(flags in prop::collection::vec(any::<bool>(), 0..30)) {
        let tasks: Vec<Task> = flags
            .iter()
            .enumerate()
            .map(|(i, done)| Task {
                id: TaskId::from_millis(u64::try_from(i).unwrap()),
                text: format!("task {i}"),
                done: *done,
            })
            .collect();
        let shown = display_order(&tasks);
        prop_assert_eq!(shown.len(), tasks.len());

        let first_done = shown.iter().position(|t| t.done).unwrap_or(shown.len());
        prop_assert!(shown[..first_done].iter().all(|t| !t.done));
        prop_assert!(shown[first_done..].iter().all(|t| t.done));

        let ids: Vec<u64> = shown.iter().map(|t| t.id.as_millis()).collect();
        prop_assert!(ids[..first_done].windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ids[first_done..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_unique_under_any_ops(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut list = TaskList::new();
        for op in ops {
            match op {
                Op::Add(text) => {
                    list.set_draft(text);
                    let _ = list.add_task();
                }
                Op::Toggle(i) => {
                    let id = pick(&list, i);
                    list.toggle_task_done(id);
                }
                Op::Delete(i, yes) => {
                    let id = pick(&list, i);
                    let before = list.len();
                    match list.delete_task(id, &mut |_: &str| yes) {
                        DeleteOutcome::Deleted(_) => {
                            prop_assert_eq!(list.len(), before - 1);
                        }
                        DeleteOutcome::Declined | DeleteOutcome::NotFound => {
                            prop_assert_eq!(list.len(), before);
                        }
                    }
                }
            }
            let ids: HashSet<TaskId> = list.tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(ids.len(), list.len());
        }
    }
}
