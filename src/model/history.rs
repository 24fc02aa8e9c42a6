//! Linear undo/redo history of task book snapshots.
//!
//! The history is a vector of deep snapshots plus a cursor. The cursor
//! always indexes the snapshot matching the current live state right
//! after the most recent commit, undo, or redo. Committing from the
//! middle of the history discards the redo tail before appending.

use super::task_book::TaskBook;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("No more commands to undo!")]
    NoUndoableState,
    #[error("No more commands to redo!")]
    NoRedoableState,
}

#[derive(Debug)]
pub struct CommandHistory {
    states: Vec<TaskBook>,
    cursor: usize,
}

impl CommandHistory {
    /// Seeds the history with a snapshot of the initial book state.
    pub fn new(initial: &TaskBook) -> Self {
        CommandHistory {
            states: vec![initial.clone()],
            cursor: 0,
        }
    }

    /// Snapshots `book`, discarding any redo states beyond the cursor.
    pub fn commit(&mut self, book: &TaskBook) {
        self.states.truncate(self.cursor + 1);
        self.states.push(book.clone());
        self.cursor += 1;
    }

    /// Steps back one state and returns the snapshot for the caller to
    /// apply via `TaskBook::reset_data`.
    pub fn undo(&mut self) -> Result<&TaskBook, HistoryError> {
        if self.cursor == 0 {
            return Err(HistoryError::NoUndoableState);
        }
        self.cursor -= 1;
        Ok(&self.states[self.cursor])
    }

    /// Steps forward one state and returns the snapshot to apply.
    pub fn redo(&mut self) -> Result<&TaskBook, HistoryError> {
        if self.cursor + 1 >= self.states.len() {
            return Err(HistoryError::NoRedoableState);
        }
        self.cursor += 1;
        Ok(&self.states[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
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
    fn undo_at_oldest_state_fails() {
        let book = TaskBook::new();
        let mut history = CommandHistory::new(&book);
        assert_eq!(history.undo().unwrap_err(), HistoryError::NoUndoableState);
    }

    #[test]
    fn redo_at_newest_state_fails() {
        let book = TaskBook::new();
        let mut history = CommandHistory::new(&book);
        assert_eq!(history.redo().unwrap_err(), HistoryError::NoRedoableState);
    }

    #[test]
    fn commit_undo_redo_round_trip() {
        let mut book = TaskBook::new();
        book.add_task(task("First")).unwrap();
        let mut history = CommandHistory::new(&book);

        let mut second = task("Second");
        second.start_date = StartDate::new("19-03-19").unwrap();
        book.add_task(second).unwrap();
        history.commit(&book);

        let restored = history.undo().unwrap().clone();
        book.reset_data(&restored);
        assert_eq!(book.tasks().len(), 1);

        let redone = history.redo().unwrap().clone();
        book.reset_data(&redone);
        assert_eq!(book.tasks().len(), 2);
    }

    #[test]
    fn commit_discards_redo_tail() {
        let mut book = TaskBook::new();
        let mut history = CommandHistory::new(&book);

        book.add_task(task("First")).unwrap();
        history.commit(&book);

        let restored = history.undo().unwrap().clone();
        book.reset_data(&restored);

        book.add_task(task("Branch")).unwrap();
        history.commit(&book);
        assert!(!history.can_redo());
        assert_eq!(history.redo().unwrap_err(), HistoryError::NoRedoableState);
    }

    #[test]
    fn snapshots_do_not_alias_live_state() {
        let mut book = TaskBook::new();
        let mut history = CommandHistory::new(&book);
        book.add_task(task("First")).unwrap();
        history.commit(&book);

        book.add_task(task("MutatesLive")).unwrap();
        // snapshot taken before the extra add is unaffected
        let restored = history.undo().unwrap();
        assert_eq!(restored.tasks().len(), 0);
    }
}
