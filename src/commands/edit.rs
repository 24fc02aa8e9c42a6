use super::{Command, CommandResult};
use crate::libs::messages::Message;
use crate::model::fields::{Description, EndDate, EndTime, Name, StartDate, StartTime, Tag};
use crate::model::history::CommandHistory;
use crate::model::task::Task;
use crate::model::task_book::TaskBook;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "edit";
pub const USAGE: &str = "edit : edits the task at the given display index\n\
    Parameters: INDEX [n/NAME] [sd/START-DATE] [st/START-TIME] [ed/END-DATE] [et/END-TIME] [d/DESCRIPTION] [c/CATEGORY] [t/TAG]...\n\
    Example: edit 1 st/15.00 t/urgent";

/// The replacement fields of an edit; unset fields keep the target's
/// current value. Supplying `tags` replaces the whole tag set.
#[derive(Debug, Clone, Default)]
pub struct EditTaskDescriptor {
    pub name: Option<Name>,
    pub start_date: Option<StartDate>,
    pub start_time: Option<StartTime>,
    pub end_date: Option<EndDate>,
    pub end_time: Option<EndTime>,
    pub description: Option<Description>,
    pub category: Option<String>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.start_date.is_some()
            || self.start_time.is_some()
            || self.end_date.is_some()
            || self.end_time.is_some()
            || self.description.is_some()
            || self.category.is_some()
            || self.tags.is_some()
    }

    fn apply_to(&self, target: &Task) -> Task {
        Task {
            name: self.name.clone().unwrap_or_else(|| target.name.clone()),
            start_date: self.start_date.clone().unwrap_or_else(|| target.start_date.clone()),
            start_time: self.start_time.clone().unwrap_or_else(|| target.start_time.clone()),
            end_date: self.end_date.clone().unwrap_or_else(|| target.end_date.clone()),
            end_time: self.end_time.clone().unwrap_or_else(|| target.end_time.clone()),
            description: self.description.clone().unwrap_or_else(|| target.description.clone()),
            category: self.category.clone().unwrap_or_else(|| target.category.clone()),
            tags: self.tags.clone().unwrap_or_else(|| target.tags.clone()),
        }
    }
}

/// Replaces the task at a 1-based display index with an edited copy.
#[derive(Debug, Clone)]
pub struct EditCommand {
    pub index: usize,
    pub descriptor: EditTaskDescriptor,
}

impl EditCommand {
    pub fn new(index: usize, descriptor: EditTaskDescriptor) -> Self {
        EditCommand { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, book: &mut TaskBook, history: &mut CommandHistory) -> Result<CommandResult> {
        if self.index == 0 || self.index > book.tasks().len() {
            return Err(msg_error_anyhow!(Message::InvalidTaskIndex(self.index)));
        }
        let target = book.tasks()[self.index - 1].clone();
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_task(&edited) && book.has_task(&edited) {
            return Err(msg_error_anyhow!(Message::DuplicateTask));
        }

        book.set_task(&target, edited.clone())
            .map_err(|_| msg_error_anyhow!(Message::DuplicateTask))?;
        history.commit(book);

        Ok(CommandResult::new(
            Message::TaskEdited(edited.to_string()).to_string(),
        ))
    }
}
