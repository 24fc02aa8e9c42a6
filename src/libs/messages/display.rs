//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text, success and failure
//! alike. The command layer, the storage boundary, and the shell never
//! format their own strings; they pick a `Message` variant and let this
//! impl render it. Fixed catalog strings (the clear success formats, the
//! duplicate/not-found errors, the undo/redo exhaustion messages) live
//! here so tests can pin them down in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // Task messages
            Message::TaskAdded(task) => format!("New task added: {}", task),
            Message::TaskDeleted(task) => format!("Deleted task: {}", task),
            Message::TaskEdited(task) => format!("Edited task: {}", task),
            Message::DuplicateTask => "This task already exists in the task book".to_string(),
            Message::InvalidTaskIndex(index) => {
                format!("The task index provided is invalid: {}", index)
            }
            Message::TasksListed(count) => format!("Listed {} tasks", count),
            Message::TasksListedOnDate(count, selector) => {
                format!("Listed {} tasks which start at {}", count, selector)
            }
            Message::TasksFound(count) => format!("{} tasks found!", count),

            // Clear messages
            Message::TaskBookCleared => "Tasketch has been cleared!".to_string(),
            Message::ClearedOnDate(count, selector) => {
                format!("clear {} tasks which start at {}", count, selector)
            }
            Message::ClearedBefore(count, reference_date) => {
                format!("clear {} tasks which have already ended on {}", count, reference_date)
            }

            // History messages
            Message::UndoSuccess => "Undo success!".to_string(),
            Message::RedoSuccess => "Redo success!".to_string(),
            Message::NothingToUndo => "No more commands to undo!".to_string(),
            Message::NothingToRedo => "No more commands to redo!".to_string(),

            // Parser messages
            Message::UnknownCommand(word) => format!("Unknown command: {}", word),
            Message::InvalidCommandFormat(usage) => {
                format!("Invalid command format!\n{}", usage)
            }
            Message::InvalidField(constraint) => constraint.clone(),

            // Storage messages
            Message::DataFileNotFound(path) => {
                format!("Data file {} not found. Will be starting with a sample Tasketch", path)
            }
            Message::DataFileMalformed(reason) => {
                format!(
                    "Data file not in the correct format ({}). Will be starting with an empty Tasketch",
                    reason
                )
            }
            Message::DataFileUnreadable(reason) => {
                format!(
                    "Problem while reading from the file ({}). Will be starting with an empty Tasketch",
                    reason
                )
            }
            Message::DataSaveFailed(reason) => format!("Failed to save data: {}", reason),
            Message::AccountFileNotFound(path) => {
                format!("Account file {} not found. Will be starting with a sample account list", path)
            }
            Message::AccountFileMalformed(reason) => {
                format!(
                    "Account file not in the correct format ({}). Will be starting with an empty account list",
                    reason
                )
            }

            // Shell messages
            Message::Welcome => "Welcome to Tasketch. Type a command, or 'exit' to quit.".to_string(),
            Message::Goodbye => "Bye. See you soon!".to_string(),
        };
        write!(f, "{}", message)
    }
}
