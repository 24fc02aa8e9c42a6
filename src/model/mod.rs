pub mod account;
pub mod fields;
pub mod history;
pub mod task;
pub mod task_book;
pub mod unique_task_list;

pub use account::{Account, AccountError, AccountList};
pub use fields::{Description, EndDate, EndTime, FieldError, Name, StartDate, StartTime, Tag};
pub use history::{CommandHistory, HistoryError};
pub use task::Task;
pub use task_book::{ListenerHandle, TaskBook};
pub use unique_task_list::{TaskListError, UniqueTaskList};
