use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use anyhow::Result;

pub const COMMAND_WORD: &str = "find";
pub const USAGE: &str = "find : finds tasks whose names contain any of the given keywords\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find lecture tutorial";

/// Case-insensitive keyword search over task names. Pure query: no
/// mutation, no history commit.
#[derive(Debug, Clone)]
pub struct FindCommand {
    pub keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        FindCommand { keywords }
    }
}

impl Command for FindCommand {
    fn execute(&self, book: &mut TaskBook, _history: &mut CommandHistory) -> Result<CommandResult> {
        let keywords: Vec<String> = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        let matches: Vec<_> = book
            .tasks()
            .iter()
            .filter(|task| {
                let name = task.name.value.to_lowercase();
                keywords
                    .iter()
                    .any(|k| name.split_whitespace().any(|word| word == k))
            })
            .cloned()
            .collect();

        Ok(CommandResult::with_tasks(
            Message::TasksFound(matches.len()).to_string(),
            matches,
        ))
    }
}
