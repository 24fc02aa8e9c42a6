//! The command layer: polymorphic commands executed against the task book.
//!
//! Every command is an immutable value implementing [`Command`]. Execution
//! either produces a [`CommandResult`] or fails with an `anyhow` error
//! whose message comes from the central catalog; no internal error type
//! leaks past this boundary. A mutating command commits a history snapshot
//! exactly once, after its mutation has fully succeeded — never before,
//! never on failure. Execution-scoped state (counts, pending-delete lists)
//! lives inside `execute`, so a command value can be run more than once
//! without cross-call contamination.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod redo;
pub mod undo;

use crate::model::history::CommandHistory;
use crate::model::task::Task;
use crate::model::task_book::TaskBook;
use anyhow::Result;

/// Outcome of a successful command: a human-readable feedback message
/// plus an optional task payload for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub tasks: Option<Vec<Task>>,
}

impl CommandResult {
    pub fn new(feedback: String) -> Self {
        CommandResult { feedback, tasks: None }
    }

    pub fn with_tasks(feedback: String, tasks: Vec<Task>) -> Self {
        CommandResult {
            feedback,
            tasks: Some(tasks),
        }
    }
}

pub trait Command: std::fmt::Debug {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult>;
}
