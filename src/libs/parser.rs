//! Free-text command parsing for the shell.
//!
//! Turns a raw input line into a boxed [`Command`]. Task fields use the
//! prefix syntax (`n/`, `sd/`, `st/`, `ed/`, `et/`, `d/`, `c/`, `t/`);
//! a value runs until the next recognized prefix, so names and
//! descriptions may contain spaces. Parse failures surface catalog
//! messages (unknown command, invalid format with usage text, or the
//! violated field constraint).

use crate::commands::add::{self, AddCommand};
use crate::commands::clear::{self, ClearCommand};
use crate::commands::delete::{self, DeleteCommand};
use crate::commands::edit::{self, EditCommand, EditTaskDescriptor};
use crate::commands::find::{self, FindCommand};
use crate::commands::list::{self, ListCommand};
use crate::commands::redo::{self, RedoCommand};
use crate::commands::undo::{self, UndoCommand};
use crate::commands::Command;
use crate::libs::messages::Message;
use crate::model::fields::{Description, EndDate, EndTime, Name, StartDate, StartTime, Tag};
use crate::model::task::Task;
use crate::msg_error_anyhow;
use anyhow::Result;
use std::collections::BTreeSet;

const PREFIXES: [&str; 8] = ["n/", "sd/", "st/", "ed/", "et/", "d/", "c/", "t/"];

pub fn parse(line: &str) -> Result<Box<dyn Command>> {
    let trimmed = line.trim();
    let (word, arguments) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => parse_add(arguments),
        edit::COMMAND_WORD => parse_edit(arguments),
        delete::COMMAND_WORD => parse_delete(arguments),
        clear::COMMAND_WORD => Ok(Box::new(ClearCommand::new(arguments))),
        find::COMMAND_WORD => parse_find(arguments),
        list::COMMAND_WORD => parse_list(arguments),
        undo::COMMAND_WORD => Ok(Box::new(UndoCommand)),
        redo::COMMAND_WORD => Ok(Box::new(RedoCommand)),
        _ => Err(msg_error_anyhow!(Message::UnknownCommand(word.to_string()))),
    }
}

/// Splits `arguments` into `(prefix, value)` pairs. Tokens before the
/// first prefix form the preamble (the index for edit).
fn tokenize(arguments: &str) -> (String, Vec<(&'static str, String)>) {
    let mut preamble = Vec::new();
    let mut fields: Vec<(&'static str, String)> = Vec::new();

    for token in arguments.split_whitespace() {
        match PREFIXES.iter().find(|p| token.starts_with(**p)) {
            Some(&prefix) => fields.push((prefix, token[prefix.len()..].to_string())),
            None => match fields.last_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(token);
                }
                None => preamble.push(token),
            },
        }
    }
    (preamble.join(" "), fields)
}

fn invalid_format(usage: &str) -> anyhow::Error {
    msg_error_anyhow!(Message::InvalidCommandFormat(usage.to_string()))
}

fn field_error(reason: impl ToString) -> anyhow::Error {
    msg_error_anyhow!(Message::InvalidField(reason.to_string()))
}

fn parse_add(arguments: &str) -> Result<Box<dyn Command>> {
    let (preamble, fields) = tokenize(arguments);
    if !preamble.is_empty() || fields.is_empty() {
        return Err(invalid_format(add::USAGE));
    }

    let mut name = None;
    let mut start_date = None;
    let mut start_time = None;
    let mut end_date = None;
    let mut end_time = None;
    let mut description = None;
    let mut category = None;
    let mut tags = BTreeSet::new();

    for (prefix, value) in fields {
        match prefix {
            "n/" => name = Some(Name::new(&value).map_err(field_error)?),
            "sd/" => start_date = Some(StartDate::new(&value).map_err(field_error)?),
            "st/" => start_time = Some(StartTime::new(&value).map_err(field_error)?),
            "ed/" => end_date = Some(EndDate::new(&value).map_err(field_error)?),
            "et/" => end_time = Some(EndTime::new(&value).map_err(field_error)?),
            "d/" => description = Some(Description::new(&value).map_err(field_error)?),
            "c/" => category = Some(value),
            "t/" => {
                tags.insert(Tag::new(&value).map_err(field_error)?);
            }
            _ => unreachable!("tokenize only yields known prefixes"),
        }
    }

    let task = Task::new(
        name.ok_or_else(|| invalid_format(add::USAGE))?,
        start_date.ok_or_else(|| invalid_format(add::USAGE))?,
        start_time.ok_or_else(|| invalid_format(add::USAGE))?,
        end_date.ok_or_else(|| invalid_format(add::USAGE))?,
        end_time.ok_or_else(|| invalid_format(add::USAGE))?,
        description.ok_or_else(|| invalid_format(add::USAGE))?,
        tags,
        category.unwrap_or_default(),
    );
    Ok(Box::new(AddCommand::new(task)))
}

fn parse_edit(arguments: &str) -> Result<Box<dyn Command>> {
    let (preamble, fields) = tokenize(arguments);
    let index: usize = preamble.parse().map_err(|_| invalid_format(edit::USAGE))?;

    let mut descriptor = EditTaskDescriptor::default();
    for (prefix, value) in fields {
        match prefix {
            "n/" => descriptor.name = Some(Name::new(&value).map_err(field_error)?),
            "sd/" => descriptor.start_date = Some(StartDate::new(&value).map_err(field_error)?),
            "st/" => descriptor.start_time = Some(StartTime::new(&value).map_err(field_error)?),
            "ed/" => descriptor.end_date = Some(EndDate::new(&value).map_err(field_error)?),
            "et/" => descriptor.end_time = Some(EndTime::new(&value).map_err(field_error)?),
            "d/" => descriptor.description = Some(Description::new(&value).map_err(field_error)?),
            "c/" => descriptor.category = Some(value),
            "t/" => {
                descriptor
                    .tags
                    .get_or_insert_with(BTreeSet::new)
                    .insert(Tag::new(&value).map_err(field_error)?);
            }
            _ => unreachable!("tokenize only yields known prefixes"),
        }
    }

    if !descriptor.is_any_field_edited() {
        return Err(invalid_format(edit::USAGE));
    }
    Ok(Box::new(EditCommand::new(index, descriptor)))
}

fn parse_delete(arguments: &str) -> Result<Box<dyn Command>> {
    let index: usize = arguments.trim().parse().map_err(|_| invalid_format(delete::USAGE))?;
    Ok(Box::new(DeleteCommand::new(index)))
}

fn parse_find(arguments: &str) -> Result<Box<dyn Command>> {
    let keywords: Vec<String> = arguments.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(find::USAGE));
    }
    Ok(Box::new(FindCommand::new(keywords)))
}

fn parse_list(arguments: &str) -> Result<Box<dyn Command>> {
    let selector = arguments.trim();
    if selector.is_empty() {
        Ok(Box::new(ListCommand::new(None)))
    } else {
        Ok(Box::new(ListCommand::new(Some(selector.to_string()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::history::CommandHistory;
    use crate::model::task_book::TaskBook;

    #[test]
    fn parse_add_builds_a_full_task() {
        let mut book = TaskBook::new();
        let mut history = CommandHistory::new(&book);
        let command = parse(
            "add n/Review lecture sd/18-03-19 st/14.00 ed/18-03-19 et/16.00 d/Week 9 notes c/school t/urgent",
        )
        .unwrap();
        command.execute(&mut book, &mut history).unwrap();

        let task = &book.tasks()[0];
        assert_eq!(task.name.value, "Review lecture");
        assert_eq!(task.description.value, "Week 9 notes");
        assert_eq!(task.category, "school");
        assert_eq!(task.tags.len(), 1);
    }

    #[test]
    fn parse_add_missing_required_field_is_invalid_format() {
        let err = parse("add n/Review sd/18-03-19").unwrap_err();
        assert!(err.to_string().starts_with("Invalid command format!"));
    }

    #[test]
    fn parse_add_bad_date_reports_constraint() {
        let err = parse("add n/X sd/32-01-19 st/14.00 ed/18-03-19 et/16.00 d/Y").unwrap_err();
        assert!(err.to_string().contains("DD-MM-YY"));
    }

    #[test]
    fn parse_unknown_command_is_reported() {
        let err = parse("frobnicate 1").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn parse_edit_requires_index_and_a_field() {
        assert!(parse("edit n/NoIndex").is_err());
        assert!(parse("edit 1").is_err());
        assert!(parse("edit 1 st/15.00").is_ok());
    }

    #[test]
    fn parse_delete_requires_integer_index() {
        assert!(parse("delete one").is_err());
        assert!(parse("delete 2").is_ok());
    }

    #[test]
    fn parse_clear_passes_selector_through() {
        for line in ["clear", "clear before", "clear 03-19"] {
            assert!(parse(line).is_ok());
        }
    }
}
