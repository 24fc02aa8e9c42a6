//! The task entity: an immutable aggregate of validated field values.

use super::fields::{Description, EndDate, EndTime, Name, StartDate, StartTime, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A single task. Tasks are value objects: "editing" one means building a
/// new `Task` and replacing the old value in its collection.
///
/// Identity is weaker than equality: two tasks are *the same task* when
/// their name and start date match (see [`Task::is_same_task`]), while
/// `==` compares every field. A `UniqueTaskList` dedupes on identity, not
/// on full equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: Name,
    pub start_date: StartDate,
    pub start_time: StartTime,
    pub end_date: EndDate,
    pub end_time: EndTime,
    pub description: Description,
    pub tags: BTreeSet<Tag>,
    pub category: String,
}

impl Task {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        start_date: StartDate,
        start_time: StartTime,
        end_date: EndDate,
        end_time: EndTime,
        description: Description,
        tags: BTreeSet<Tag>,
        category: String,
    ) -> Self {
        Task {
            name,
            start_date,
            start_time,
            end_date,
            end_time,
            description,
            tags,
            category,
        }
    }

    /// Identity rule: same name and same start date.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name == other.name && self.start_date == other.start_date
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {} - {} {})",
            self.name, self.start_date, self.start_time, self.end_date, self.end_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::*;

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
    fn same_name_and_start_date_is_same_task() {
        let a = task("Review", "18-03-19");
        let mut b = task("Review", "18-03-19");
        b.category = "school".to_string();
        assert!(a.is_same_task(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn different_start_date_is_different_task() {
        let a = task("Review", "18-03-19");
        let b = task("Review", "19-03-19");
        assert!(!a.is_same_task(&b));
    }
}
