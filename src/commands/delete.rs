use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use crate::msg_error_anyhow;
use anyhow::Result;

pub const COMMAND_WORD: &str = "delete";
pub const USAGE: &str = "delete : deletes the task at the given display index\n\
    Parameters: INDEX (a positive integer)\n\
    Example: delete 1";

/// Deletes the task at a 1-based display index.
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub index: usize,
}

impl DeleteCommand {
    pub fn new(index: usize) -> Self {
        DeleteCommand { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        if self.index == 0 || self.index > book.tasks().len() {
            return Err(msg_error_anyhow!(Message::InvalidTaskIndex(self.index)));
        }
        let target = book.tasks()[self.index - 1].clone();

        book.remove_task(&target)
            .map_err(|_| msg_error_anyhow!(Message::InvalidTaskIndex(self.index)))?;
        history.commit(book);

        Ok(CommandResult::new(
            Message::TaskDeleted(target.to_string()).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::*;
    use crate::model::task::Task;
    use std::collections::BTreeSet;

    fn task(name: &str) -> Task {
        Task::new(
            Name::new(name).unwrap(),
            StartDate::new("18-03-19").unwrap(),
            StartTime::new("09.00").unwrap(),
            EndDate::new("20-03-19").unwrap(),
            EndTime::new("10.00").unwrap(),
            Description::new("desc").unwrap(),
            BTreeSet::new(),
            "work".to_string(),
        )
    }

    #[test]
    fn delete_by_display_index() {
        let mut book = TaskBook::new();
        book.add_task(task("First")).unwrap();
        let mut history = CommandHistory::new(&book);
        DeleteCommand::new(1).execute(&mut book, &mut history).unwrap();
        assert!(book.tasks().is_empty());
        assert!(history.can_undo());
    }

    #[test]
    fn delete_out_of_range_fails() {
        let mut book = TaskBook::new();
        book.add_task(task("First")).unwrap();
        let mut history = CommandHistory::new(&book);
        for index in [0, 2] {
            let err = DeleteCommand::new(index)
                .execute(&mut book, &mut history)
                .unwrap_err();
            assert_eq!(err.to_string(), Message::InvalidTaskIndex(index).to_string());
        }
        assert_eq!(book.tasks().len(), 1);
        assert!(!history.can_undo());
    }
}
