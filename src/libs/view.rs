use crate::model::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a task sequence as a terminal table, 1-based indices
    /// matching the ones delete/edit accept.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "START", "END", "DESCRIPTION", "CATEGORY", "TAGS"]);
        for (index, task) in tasks.iter().enumerate() {
            let tags = task
                .tags
                .iter()
                .map(|t| t.value.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(row![
                index + 1,
                task.name,
                format!("{} {}", task.start_date, task.start_time),
                format!("{} {}", task.end_date, task.end_time),
                task.description,
                task.category,
                tags
            ]);
        }
        table.printstd();
    }
}
