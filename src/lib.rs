//! # Tasketch - personal task tracker
//!
//! An in-memory task book with identity semantics, command-driven
//! mutation with undo/redo history, and validated JSON persistence.
//!
//! ## Features
//!
//! - **Task Book**: ordered, duplicate-free task store with change
//!   notifications
//! - **Commands**: add, edit, delete, clear, find, list, undo, redo
//! - **Undo/Redo**: linear history of deep task book snapshots
//! - **Persistence**: JSON documents validated field by field on load
//! - **Accounts**: a companion account list persisted in the same pattern
//!
//! ## Usage
//!
//! ```rust
//! use tasketch::commands::Command;
//! use tasketch::libs::parser;
//! use tasketch::model::{CommandHistory, TaskBook};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut book = TaskBook::new();
//! let mut history = CommandHistory::new(&book);
//! let command = parser::parse(
//!     "add n/Review notes sd/18-03-19 st/14.00 ed/18-03-19 et/16.00 d/Week 9 c/study",
//! )?;
//! let result = command.execute(&mut book, &mut history)?;
//! println!("{}", result.feedback);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod libs;
pub mod model;
pub mod storage;
