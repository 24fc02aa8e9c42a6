use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use crate::msg_error_anyhow;
use anyhow::Result;

pub const COMMAND_WORD: &str = "redo";
pub const USAGE: &str = "redo : reapplies the most recently undone change\n\
    Parameters: none";

/// Applies the next history snapshot to the book. Does not commit.
#[derive(Debug, Clone)]
pub struct RedoCommand;

impl Command for RedoCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        let snapshot = history
            .redo()
            .map_err(|_| msg_error_anyhow!(Message::NothingToRedo))?
            .clone();
        book.reset_data(&snapshot);
        Ok(CommandResult::new(Message::RedoSuccess.to_string()))
    }
}
