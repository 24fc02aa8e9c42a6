use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use crate::msg_error_anyhow;
use anyhow::Result;

pub const COMMAND_WORD: &str = "undo";
pub const USAGE: &str = "undo : restores the task book to its previous state\n\
    Parameters: none";

/// Applies the previous history snapshot to the book. Does not commit.
#[derive(Debug, Clone)]
pub struct UndoCommand;

impl Command for UndoCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        let snapshot = history
            .undo()
            .map_err(|_| msg_error_anyhow!(Message::NothingToUndo))?
            .clone();
        book.reset_data(&snapshot);
        Ok(CommandResult::new(Message::UndoSuccess.to_string()))
    }
}
