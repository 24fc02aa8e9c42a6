//! Durable JSON round-trip for the task book and the account list.
//!
//! Loading distinguishes three outcomes: `Ok(None)` when the file does
//! not exist (the caller substitutes sample data), `Ok(Some(..))` for a
//! fully validated document, and `Err(StorageError)` for anything
//! malformed. Validation is fail-fast and field by field, so a malformed
//! document can never partially populate a live book.

pub mod accounts;
pub mod sample_data;
pub mod task_book;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A required field is absent from a persisted record. Carries the
    /// owning entity ("Task", "Account") and the field name.
    #[error("{0}'s {1} field is missing!")]
    MissingField(&'static str, &'static str),
    /// A present field failed its format predicate. Carries the field's
    /// constraint message.
    #[error("{0}")]
    InvalidField(String),
    /// Two persisted records collapse to the same identity.
    #[error("Persisted data contains duplicate entries")]
    DuplicateEntry,
    /// The document is not structurally valid JSON of the expected shape.
    #[error("Data file is not in the correct format: {0}")]
    Format(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
