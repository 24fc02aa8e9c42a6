//! The task book: the mutable aggregate root over a [`UniqueTaskList`].
//!
//! All mutation goes through book-level methods, which delegate to the
//! underlying list and — only after the mutation has fully succeeded —
//! notify registered listeners. A failed or partial mutation never fires
//! a notification.
//!
//! Listeners are held in an explicit registry owned by the book. They are
//! invoked synchronously with a shared reference to the book and must not
//! mutate the book from inside their own callback.
//!
//! Cloning a book produces a deep snapshot of its task sequence with an
//! empty listener registry; snapshots never alias live state, which is
//! what makes them safe to store in the undo/redo history.

use super::task::Task;
use super::unique_task_list::{TaskListError, UniqueTaskList};
use std::fmt;

type Listener = Box<dyn Fn(&TaskBook)>;

/// Subscription handle returned by [`TaskBook::add_listener`], used to
/// unsubscribe with [`TaskBook::remove_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

#[derive(Default)]
pub struct TaskBook {
    tasks: UniqueTaskList,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

impl TaskBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book holding deep copies of another book's tasks.
    pub fn from_book(other: &TaskBook) -> Self {
        let mut book = Self::new();
        book.tasks = other.tasks.clone();
        book
    }

    /// Read-only, display-ordered view of the tasks.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), TaskListError> {
        self.tasks.add(task)?;
        self.indicate_modified();
        Ok(())
    }

    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TaskListError> {
        self.tasks.set_task(target, edited)?;
        self.indicate_modified();
        Ok(())
    }

    pub fn remove_task(&mut self, task: &Task) -> Result<(), TaskListError> {
        self.tasks.remove(task)?;
        self.indicate_modified();
        Ok(())
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), TaskListError> {
        self.tasks.set_tasks(tasks)?;
        self.indicate_modified();
        Ok(())
    }

    /// Replaces this book's contents with those of `other`. Drives clear,
    /// document loading, and the application of undo/redo snapshots.
    pub fn reset_data(&mut self, other: &TaskBook) {
        // contents of another book are already identity-unique
        self.tasks = other.tasks.clone();
        self.indicate_modified();
    }

    pub fn add_listener(&mut self, listener: impl Fn(&TaskBook) + 'static) -> ListenerHandle {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        ListenerHandle(id)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|(id, _)| *id != handle.0);
    }

    fn indicate_modified(&self) {
        for (_, listener) in &self.listeners {
            listener(self);
        }
    }
}

impl Clone for TaskBook {
    /// Deep snapshot: task contents only, listeners are not carried over.
    fn clone(&self) -> Self {
        Self::from_book(self)
    }
}

impl PartialEq for TaskBook {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl Eq for TaskBook {}

impl fmt::Debug for TaskBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskBook")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for TaskBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tasks", self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::*;
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    fn task(name: &str, start_date: &str) -> Task {
        Task::new(
            Name::new(name).unwrap(),
            StartDate::new(start_date).unwrap(),
            StartTime::new("09.00").unwrap(),
            EndDate::new("20-03-19").unwrap(),
            EndTime::new("10.00").unwrap(),
            Description::new("desc").unwrap(),
            BTreeSet::new(),
            "work".to_string(),
        )
    }

    #[test]
    fn notification_fires_after_successful_mutation() {
        let mut book = TaskBook::new();
        let fired = Rc::new(Cell::new(0));
        let fired_in_listener = fired.clone();
        book.add_listener(move |b| {
            // the mutation is already visible when the listener runs
            assert_eq!(b.tasks().len(), 1);
            fired_in_listener.set(fired_in_listener.get() + 1);
        });
        book.add_task(task("Review", "18-03-19")).unwrap();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn notification_does_not_fire_on_failed_mutation() {
        let mut book = TaskBook::new();
        book.add_task(task("Review", "18-03-19")).unwrap();
        let fired = Rc::new(Cell::new(0));
        let fired_in_listener = fired.clone();
        book.add_listener(move |_| fired_in_listener.set(fired_in_listener.get() + 1));
        assert!(book.add_task(task("Review", "18-03-19")).is_err());
        assert!(book.remove_task(&task("Ghost", "01-01-19")).is_err());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn removed_listener_no_longer_fires() {
        let mut book = TaskBook::new();
        let fired = Rc::new(Cell::new(0));
        let fired_in_listener = fired.clone();
        let handle = book.add_listener(move |_| fired_in_listener.set(fired_in_listener.get() + 1));
        book.remove_listener(handle);
        book.add_task(task("Review", "18-03-19")).unwrap();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn clone_is_a_deep_snapshot() {
        let mut book = TaskBook::new();
        book.add_task(task("Review", "18-03-19")).unwrap();
        let snapshot = book.clone();
        book.add_task(task("Later", "19-03-19")).unwrap();
        assert_eq!(snapshot.tasks().len(), 1);
        assert_eq!(book.tasks().len(), 2);
        assert_ne!(snapshot, book);
    }

    #[test]
    fn reset_data_replaces_contents() {
        let mut source = TaskBook::new();
        source.add_task(task("Review", "18-03-19")).unwrap();
        let mut book = TaskBook::new();
        book.add_task(task("Old", "01-01-19")).unwrap();
        book.reset_data(&source);
        assert_eq!(book, source);
    }

    #[test]
    fn equality_is_structural_and_order_sensitive() {
        let mut a = TaskBook::new();
        let mut b = TaskBook::new();
        a.add_task(task("One", "18-03-19")).unwrap();
        a.add_task(task("Two", "18-03-19")).unwrap();
        b.add_task(task("Two", "18-03-19")).unwrap();
        b.add_task(task("One", "18-03-19")).unwrap();
        assert_ne!(a, b);
    }
}
