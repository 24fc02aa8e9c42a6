use super::{Command, CommandResult};
use crate::libs::date_util;
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use anyhow::Result;

pub const COMMAND_WORD: &str = "list";
pub const USAGE: &str = "list : lists tasks, optionally filtered by start date\n\
    Parameters: none or DATE (DD-MM-YY or MM-YY)\n\
    Example: list\n\
    list 18-03-19\n\
    list 03-19";

/// Lists all tasks, or those whose start date matches a full or partial
/// date selector. Pure query: no mutation, no history commit.
#[derive(Debug, Clone)]
pub struct ListCommand {
    pub selector: Option<String>,
}

impl ListCommand {
    pub fn new(selector: Option<String>) -> Self {
        ListCommand { selector }
    }
}

impl Command for ListCommand {
    fn execute(&self, book: &mut TaskBook, _history: &mut CommandHistory) -> Result<CommandResult> {
        match &self.selector {
            None => {
                let tasks = book.tasks().to_vec();
                Ok(CommandResult::with_tasks(
                    Message::TasksListed(tasks.len()).to_string(),
                    tasks,
                ))
            }
            Some(selector) => {
                let tasks: Vec<_> = book
                    .tasks()
                    .iter()
                    .filter(|task| date_util::matches_selector(selector, &task.start_date.value))
                    .cloned()
                    .collect();
                Ok(CommandResult::with_tasks(
                    Message::TasksListedOnDate(tasks.len(), selector.clone()).to_string(),
                    tasks,
                ))
            }
        }
    }
}
