//! Built-in sample data used when no data file exists yet.

use crate::model::account::{Account, AccountList};
use crate::model::fields::{Description, EndDate, EndTime, Name, StartDate, StartTime, Tag};
use crate::model::task::Task;
use crate::model::task_book::TaskBook;
use std::collections::BTreeSet;

fn sample_task(
    name: &str,
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
    description: &str,
    tags: &[&str],
    category: &str,
) -> Task {
    // sample literals are fixed and valid by construction
    Task::new(
        Name::new(name).expect("valid sample name"),
        StartDate::new(start_date).expect("valid sample start date"),
        StartTime::new(start_time).expect("valid sample start time"),
        EndDate::new(end_date).expect("valid sample end date"),
        EndTime::new(end_time).expect("valid sample end time"),
        Description::new(description).expect("valid sample description"),
        tags.iter()
            .map(|t| Tag::new(t).expect("valid sample tag"))
            .collect::<BTreeSet<_>>(),
        category.to_string(),
    )
}

pub fn sample_task_book() -> TaskBook {
    let mut book = TaskBook::new();
    let samples = [
        sample_task(
            "Review lecture notes",
            "18-03-19",
            "14.00",
            "18-03-19",
            "16.00",
            "Go through week 9 material",
            &["school"],
            "study",
        ),
        sample_task(
            "Team meeting",
            "19-03-19",
            "10.00",
            "19-03-19",
            "11.30",
            "Sprint planning with the project group",
            &["project", "urgent"],
            "work",
        ),
        sample_task(
            "Grocery run",
            "20-03-19",
            "18.00",
            "20-03-19",
            "19.00",
            "Restock for the week",
            &[],
            "errands",
        ),
    ];
    for task in samples {
        book.add_task(task).expect("sample tasks are unique");
    }
    book
}

pub fn sample_account_list() -> AccountList {
    let mut list = AccountList::new();
    list.add_account(Account::new("admin", "admin").expect("valid sample account"))
        .expect("sample accounts are unique");
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_book_is_non_empty_and_unique() {
        let book = sample_task_book();
        assert_eq!(book.tasks().len(), 3);
    }

    #[test]
    fn sample_accounts_exist() {
        assert_eq!(sample_account_list().accounts().len(), 1);
    }
}
