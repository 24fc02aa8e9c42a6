//! Clears the task book, entirely or by date selector.
//!
//! The selector drives three modes:
//!
//! * empty — the whole book is replaced with an empty one;
//! * `before` — every task whose *end date* is on or before the reference
//!   date (24 hours prior to now, rendered `DD-MM-YY`) is deleted;
//! * anything else — treated as a date filter against each task's *start
//!   date*: three `-`-separated components match exactly, two components
//!   match the month/year suffix, any other shape matches nothing.
//!
//! The command value holds only the selector. The match count and the
//! pending-delete list are locals of `execute`, so one `ClearCommand`
//! can be executed repeatedly without stale state.

use super::{Command, CommandResult};
use crate::libs::date_util;
use crate::libs::messages::Message;
use crate::model::history::CommandHistory;
use crate::model::task_book::TaskBook;
use anyhow::Result;

pub const COMMAND_WORD: &str = "clear";
pub const USAGE: &str = "clear : clear tasks\n\
    Parameters: none or DATE or before\n\
    Example: clear\n\
    clear 18-03-19\n\
    clear 03-19\n\
    clear before";

#[derive(Debug, Clone)]
pub struct ClearCommand {
    pub selector: String,
}

impl ClearCommand {
    pub fn new(selector: &str) -> Self {
        ClearCommand {
            selector: selector.to_string(),
        }
    }
}

impl Command for ClearCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        if self.selector.is_empty() {
            book.reset_data(&TaskBook::new());
            history.commit(book);
            return Ok(CommandResult::new(Message::TaskBookCleared.to_string()));
        }

        if self.selector == "before" {
            let reference_date = date_util::day_before_today();
            let tasks_to_be_deleted: Vec<_> = book
                .tasks()
                .iter()
                .filter(|task| date_util::is_on_or_before(&reference_date, &task.end_date.value))
                .cloned()
                .collect();
            let count = tasks_to_be_deleted.len();

            for task in &tasks_to_be_deleted {
                // selected from the live book, so removal cannot fail
                book.remove_task(task)?;
            }
            history.commit(book);
            return Ok(CommandResult::new(
                Message::ClearedBefore(count, reference_date).to_string(),
            ));
        }

        let tasks_to_be_deleted: Vec<_> = book
            .tasks()
            .iter()
            .filter(|task| date_util::matches_selector(&self.selector, &task.start_date.value))
            .cloned()
            .collect();
        let count = tasks_to_be_deleted.len();

        for task in &tasks_to_be_deleted {
            book.remove_task(task)?;
        }
        history.commit(book);
        Ok(CommandResult::new(
            Message::ClearedOnDate(count, self.selector.clone()).to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::*;
    use crate::model::task::Task;
    use std::collections::BTreeSet;

    fn task(name: &str, start_date: &str, end_date: &str) -> Task {
        Task::new(
            Name::new(name).unwrap(),
            StartDate::new(start_date).unwrap(),
            StartTime::new("09.00").unwrap(),
            EndDate::new(end_date).unwrap(),
            EndTime::new("10.00").unwrap(),
            Description::new("desc").unwrap(),
            BTreeSet::new(),
            "work".to_string(),
        )
    }

    fn seeded_book() -> TaskBook {
        let mut book = TaskBook::new();
        book.add_task(task("A", "01-03-19", "01-03-19")).unwrap();
        book.add_task(task("B", "15-03-19", "15-03-19")).unwrap();
        book.add_task(task("C", "01-04-19", "01-04-19")).unwrap();
        book
    }

    #[test]
    fn empty_selector_clears_everything() {
        let mut book = seeded_book();
        let mut history = CommandHistory::new(&book);
        let result = ClearCommand::new("").execute(&mut book, &mut history).unwrap();
        assert!(book.tasks().is_empty());
        assert_eq!(result.feedback, "Tasketch has been cleared!");
        assert!(history.can_undo());
    }

    #[test]
    fn empty_selector_is_idempotent() {
        let mut book = seeded_book();
        let mut history = CommandHistory::new(&book);
        let command = ClearCommand::new("");
        let first = command.execute(&mut book, &mut history).unwrap();
        let second = command.execute(&mut book, &mut history).unwrap();
        assert!(book.tasks().is_empty());
        assert_eq!(first.feedback, second.feedback);
    }

    #[test]
    fn month_year_selector_deletes_matching_start_dates() {
        let mut book = seeded_book();
        let mut history = CommandHistory::new(&book);
        let result = ClearCommand::new("03-19").execute(&mut book, &mut history).unwrap();
        assert_eq!(result.feedback, "clear 2 tasks which start at 03-19");
        assert_eq!(book.tasks().len(), 1);
        assert_eq!(book.tasks()[0].name.value, "C");
    }

    #[test]
    fn exact_date_selector_deletes_single_match() {
        let mut book = seeded_book();
        let mut history = CommandHistory::new(&book);
        let result = ClearCommand::new("15-03-19").execute(&mut book, &mut history).unwrap();
        assert_eq!(result.feedback, "clear 1 tasks which start at 15-03-19");
        let remaining: Vec<_> = book.tasks().iter().map(|t| t.name.value.clone()).collect();
        assert_eq!(remaining, vec!["A", "C"]);
    }

    #[test]
    fn unmatched_selector_deletes_nothing_but_still_commits() {
        let mut book = seeded_book();
        let mut history = CommandHistory::new(&book);
        let result = ClearCommand::new("31-12-99").execute(&mut book, &mut history).unwrap();
        assert_eq!(book.tasks().len(), 3);
        assert!(result.feedback.starts_with("clear 0 tasks"));
        assert!(history.can_undo());
    }

    #[test]
    fn before_selector_deletes_tasks_ended_before_reference() {
        let mut book = TaskBook::new();
        // end dates far in the past and far in the future of any run date
        book.add_task(task("Past", "01-01-01", "01-01-01")).unwrap();
        book.add_task(task("Future", "01-01-98", "31-12-98")).unwrap();
        let mut history = CommandHistory::new(&book);
        let result = ClearCommand::new("before").execute(&mut book, &mut history).unwrap();
        assert_eq!(book.tasks().len(), 1);
        assert_eq!(book.tasks()[0].name.value, "Future");
        assert!(result.feedback.starts_with("clear 1 tasks which have already ended on"));
    }

    #[test]
    fn same_command_value_executes_twice_without_stale_state() {
        let command = ClearCommand::new("03-19");
        for _ in 0..2 {
            let mut book = seeded_book();
            let mut history = CommandHistory::new(&book);
            let result = command.execute(&mut book, &mut history).unwrap();
            assert_eq!(result.feedback, "clear 2 tasks which start at 03-19");
        }
    }
}
