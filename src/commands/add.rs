use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task::Task;
use crate::model::task_book::TaskBook;
use crate::msg_error_anyhow;
use anyhow::Result;

pub const COMMAND_WORD: &str = "add";
pub const USAGE: &str = "add : adds a task\n\
    Parameters: n/NAME sd/START-DATE st/START-TIME ed/END-DATE et/END-TIME d/DESCRIPTION c/CATEGORY [t/TAG]...\n\
    Example: add n/Review lecture sd/18-03-19 st/14.00 ed/18-03-19 et/16.00 d/Week 9 notes c/school t/urgent";

/// Adds a task to the book, rejecting identity duplicates.
#[derive(Debug, Clone)]
pub struct AddCommand {
    pub task: Task,
}

impl AddCommand {
    pub fn new(task: Task) -> Self {
        AddCommand { task }
    }
}

impl Command for AddCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        if book.has_task(&self.task) {
            return Err(msg_error_anyhow!(Message::DuplicateTask));
        }

        book.add_task(self.task.clone())
            .map_err(|_| msg_error_anyhow!(Message::DuplicateTask))?;
        history.commit(book);

        Ok(CommandResult::new(
            Message::TaskAdded(self.task.to_string()).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::*;
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
    fn add_commits_and_reports() {
        let mut book = TaskBook::new();
        let mut history = CommandHistory::new(&book);
        let result = AddCommand::new(task("Review")).execute(&mut book, &mut history).unwrap();
        assert_eq!(book.tasks().len(), 1);
        assert!(result.feedback.starts_with("New task added:"));
        assert!(history.can_undo());
    }

    #[test]
    fn add_duplicate_fails_without_commit() {
        let mut book = TaskBook::new();
        book.add_task(task("Review")).unwrap();
        let mut history = CommandHistory::new(&book);
        let err = AddCommand::new(task("Review"))
            .execute(&mut book, &mut history)
            .unwrap_err();
        assert_eq!(err.to_string(), Message::DuplicateTask.to_string());
        assert_eq!(book.tasks().len(), 1);
        assert!(!history.can_undo());
    }
}
