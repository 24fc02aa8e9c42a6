//! Self-validating field value types for tasks.
//!
//! Every scalar a task is made of (name, dates, times, description, tags)
//! is wrapped in its own type that enforces a format predicate at
//! construction. Construction either succeeds with a canonical value or
//! fails with a [`FieldError`] carrying the field's constraint message;
//! malformed input is never silently coerced. The same predicates and
//! constraint messages are reused by the storage layer when it validates
//! persisted records field by field.
//!
//! Dates are kept as `DD-MM-YY` strings and times as `HH.MM` strings
//! rather than calendar types. Date ordering and filtering on top of these
//! strings lives in `libs::date_util`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// A field value failed its format predicate. The message is the
/// violated field's constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FieldError(pub String);

pub const NAME_CONSTRAINTS: &str =
    "Names should start with an alphanumeric character, contain only alphanumeric characters and spaces, and be at most 100 characters long";
pub const START_DATE_CONSTRAINTS: &str = "Start date should be in the format DD-MM-YY, e.g. 18-03-19";
pub const END_DATE_CONSTRAINTS: &str = "End date should be in the format DD-MM-YY, e.g. 18-03-19";
pub const START_TIME_CONSTRAINTS: &str = "Start time should be in the 24-hour format HH.MM, e.g. 14.30";
pub const END_TIME_CONSTRAINTS: &str = "End time should be in the 24-hour format HH.MM, e.g. 16.00";
pub const DESCRIPTION_CONSTRAINTS: &str =
    "Descriptions should not be blank and must be at most 200 characters long";
pub const TAG_CONSTRAINTS: &str = "Tag names should be alphanumeric";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[012])-[0-9]{2}$").expect("valid date regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3])\.[0-5][0-9]$").expect("valid time regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

macro_rules! field_display {
    ($($ty:ident),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value)
            }
        })+
    };
}

/// Task name. Identity-relevant: two tasks with the same name and the
/// same start date are considered the same task.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() <= 100 && NAME_RE.is_match(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartDate {
    pub value: String,
}

impl StartDate {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(START_DATE_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        DATE_RE.is_match(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndDate {
    pub value: String,
}

impl EndDate {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(END_DATE_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        DATE_RE.is_match(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartTime {
    pub value: String,
}

impl StartTime {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(START_TIME_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        TIME_RE.is_match(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndTime {
    pub value: String,
}

impl EndTime {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(END_TIME_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        TIME_RE.is_match(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Description {
    pub value: String,
}

impl Description {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(DESCRIPTION_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        !value.trim().is_empty() && value.len() <= 200
    }
}

/// A single alphanumeric tag name. Tasks hold tags in a set, so a tag
/// appears on a task at most once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub value: String,
}

impl Tag {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !Self::is_valid(value) {
            return Err(FieldError(TAG_CONSTRAINTS.to_string()));
        }
        Ok(Self { value: value.to_string() })
    }

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
    }
}

field_display!(Name, StartDate, EndDate, StartTime, EndTime, Description, Tag);
