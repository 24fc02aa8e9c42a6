//! JSON storage for the task book.
//!
//! Each task is persisted as a record of named string fields plus a list
//! of tag names. On load every record runs through a fixed validation
//! order — name, start date, start time, end date, end time, description,
//! tags — checking presence first and format second, failing on the first
//! violation. Category is free-form and defaults to empty when absent.

use super::StorageError;
use crate::model::fields::{Description, EndDate, EndTime, Name, StartDate, StartTime, Tag};
use crate::model::task::Task;
use crate::model::task_book::TaskBook;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct JsonSerializableTaskBook {
    #[serde(default)]
    tasks: Vec<JsonAdaptedTask>,
}

/// Serde-friendly version of [`Task`]: every field optional on the way
/// in, so presence can be reported per field instead of as a parse error.
#[derive(Debug, Serialize, Deserialize)]
struct JsonAdaptedTask {
    name: Option<String>,
    #[serde(rename = "start date")]
    start_date: Option<String>,
    #[serde(rename = "start time")]
    start_time: Option<String>,
    #[serde(rename = "end date")]
    end_date: Option<String>,
    #[serde(rename = "end time")]
    end_time: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tagged: Vec<String>,
    #[serde(default)]
    category: String,
}

impl JsonAdaptedTask {
    fn from_model(source: &Task) -> Self {
        JsonAdaptedTask {
            name: Some(source.name.value.clone()),
            start_date: Some(source.start_date.value.clone()),
            start_time: Some(source.start_time.value.clone()),
            end_date: Some(source.end_date.value.clone()),
            end_time: Some(source.end_time.value.clone()),
            description: Some(source.description.value.clone()),
            tagged: source.tags.iter().map(|t| t.value.clone()).collect(),
            category: source.category.clone(),
        }
    }

    /// Validates this record into a model [`Task`], fail-fast, first
    /// violation wins.
    fn to_model(&self) -> Result<Task, StorageError> {
        let name = self
            .name
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "name"))?;
        let name = Name::new(name).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let start_date = self
            .start_date
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "start date"))?;
        let start_date =
            StartDate::new(start_date).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let start_time = self
            .start_time
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "start time"))?;
        let start_time =
            StartTime::new(start_time).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let end_date = self
            .end_date
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "end date"))?;
        let end_date =
            EndDate::new(end_date).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let end_time = self
            .end_time
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "end time"))?;
        let end_time =
            EndTime::new(end_time).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let description = self
            .description
            .as_deref()
            .ok_or(StorageError::MissingField("Task", "description"))?;
        let description =
            Description::new(description).map_err(|e| StorageError::InvalidField(e.to_string()))?;

        let mut tags = BTreeSet::new();
        for tag in &self.tagged {
            tags.insert(Tag::new(tag).map_err(|e| StorageError::InvalidField(e.to_string()))?);
        }

        Ok(Task::new(
            name,
            start_date,
            start_time,
            end_date,
            end_time,
            description,
            tags,
            self.category.clone(),
        ))
    }
}

pub struct TaskBookStorage {
    file_path: PathBuf,
}

impl TaskBookStorage {
    pub fn new(file_path: PathBuf) -> Self {
        TaskBookStorage { file_path }
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    /// Reads and validates the task book. `Ok(None)` means the file does
    /// not exist; any malformed content is an error and nothing is
    /// partially returned.
    pub fn read(&self) -> Result<Option<TaskBook>, StorageError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.file_path)?;
        let document: JsonSerializableTaskBook = serde_json::from_str(&raw)?;

        let mut tasks = Vec::with_capacity(document.tasks.len());
        for adapted in &document.tasks {
            tasks.push(adapted.to_model()?);
        }

        let mut book = TaskBook::new();
        book.set_tasks(tasks).map_err(|_| StorageError::DuplicateEntry)?;
        Ok(Some(book))
    }

    /// Writes every field in its canonical validated string form.
    pub fn save(&self, book: &TaskBook) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = JsonSerializableTaskBook {
            tasks: book.tasks().iter().map(JsonAdaptedTask::from_model).collect(),
        };
        let file = fs::File::create(&self.file_path)?;
        serde_json::to_writer_pretty(&file, &document)?;
        Ok(())
    }
}
