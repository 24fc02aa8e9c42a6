//! An ordered task container that enforces identity uniqueness.
//!
//! The list preserves insertion order and never holds two tasks that are
//! identity-equal (same name and start date). Mutations are all-or-nothing:
//! every operation validates before touching the stored sequence, so a
//! failed call leaves the list exactly as it was.

use super::task::Task;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    #[error("Operation would result in duplicate tasks")]
    DuplicateTask,
    #[error("Task not found in the task list")]
    TaskNotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueTaskList {
    tasks: Vec<Task>,
}

impl UniqueTaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff some stored element is identity-equal to `task`.
    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t.is_same_task(task))
    }

    /// Appends `task`, preserving insertion order.
    pub fn add(&mut self, task: Task) -> Result<(), TaskListError> {
        if self.contains(&task) {
            return Err(TaskListError::DuplicateTask);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces `target` (located by full structural equality) with
    /// `edited`, keeping its position. Fails if `target` is absent, or if
    /// `edited` is identity-equal to a *different* stored task.
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TaskListError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t == target)
            .ok_or(TaskListError::TaskNotFound)?;
        if !target.is_same_task(&edited) && self.contains(&edited) {
            return Err(TaskListError::DuplicateTask);
        }
        self.tasks[index] = edited;
        Ok(())
    }

    /// Removes `task` (located by full structural equality).
    pub fn remove(&mut self, task: &Task) -> Result<(), TaskListError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t == task)
            .ok_or(TaskListError::TaskNotFound)?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Replaces the entire contents with `tasks`. The input is checked for
    /// internal identity collisions before any mutation is applied.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), TaskListError> {
        if !Self::tasks_are_unique(&tasks) {
            return Err(TaskListError::DuplicateTask);
        }
        self.tasks = tasks;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn tasks_are_unique(tasks: &[Task]) -> bool {
        for (i, a) in tasks.iter().enumerate() {
            if tasks[i + 1..].iter().any(|b| a.is_same_task(b)) {
                return false;
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a UniqueTaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
