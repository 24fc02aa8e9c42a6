use anyhow::Result;
use clap::Parser;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tasketch::libs::data_storage::DataStorage;
use tasketch::libs::messages::Message;
use tasketch::libs::parser;
use tasketch::libs::view::View;
use tasketch::model::account::AccountList;
use tasketch::model::history::CommandHistory;
use tasketch::model::task_book::TaskBook;
use tasketch::storage::accounts::AccountListStorage;
use tasketch::storage::sample_data;
use tasketch::storage::task_book::TaskBookStorage;
use tasketch::storage::StorageError;
use tasketch::{msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Task book file path (defaults to the platform data directory)
    #[arg(long)]
    book: Option<PathBuf>,
    /// Account list file path (defaults to the platform data directory)
    #[arg(long)]
    accounts: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let storage = DataStorage::new();
    let book_path = match cli.book {
        Some(path) => path,
        None => storage.get_path("taskbook.json")?,
    };
    let accounts_path = match cli.accounts {
        Some(path) => path,
        None => storage.get_path("accounts.json")?,
    };

    let book_storage = TaskBookStorage::new(book_path);
    let account_storage = AccountListStorage::new(accounts_path);

    let mut book = init_task_book(&book_storage);
    let accounts = init_account_list(&account_storage);
    let mut history = CommandHistory::new(&book);
    msg_debug!(format!(
        "Initialized with {} tasks from {}",
        book.tasks().len(),
        book_storage.file_path().display()
    ));

    // flush-on-change: a listener marks the book dirty, the loop below
    // writes it out after each successful command
    let dirty = Rc::new(Cell::new(false));
    let dirty_in_listener = dirty.clone();
    book.add_listener(move |_| dirty_in_listener.set(true));

    msg_print!(Message::Welcome);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        match parser::parse(line).and_then(|command| command.execute(&mut book, &mut history)) {
            Ok(result) => {
                msg_success!(result.feedback);
                if let Some(tasks) = result.tasks {
                    View::tasks(&tasks);
                }
            }
            Err(err) => msg_error!(err),
        }

        if dirty.replace(false) {
            if let Err(err) = book_storage.save(&book) {
                msg_warning!(Message::DataSaveFailed(err.to_string()));
            }
        }
    }

    // synchronous flush on the way out; failures are logged, never fatal
    if let Err(err) = book_storage.save(&book) {
        msg_warning!(Message::DataSaveFailed(err.to_string()));
    }
    if let Err(err) = account_storage.save(&accounts) {
        msg_warning!(Message::DataSaveFailed(err.to_string()));
    }
    msg_print!(Message::Goodbye);
    Ok(())
}

/// Hydrates the task book: sample data when no file exists, an empty book
/// when the file is malformed or unreadable. Malformed data is never
/// partially applied.
fn init_task_book(storage: &TaskBookStorage) -> TaskBook {
    match storage.read() {
        Ok(Some(book)) => book,
        Ok(None) => {
            msg_info!(Message::DataFileNotFound(storage.file_path().display().to_string()));
            sample_data::sample_task_book()
        }
        Err(StorageError::Io(err)) => {
            msg_warning!(Message::DataFileUnreadable(err.to_string()));
            TaskBook::new()
        }
        Err(err) => {
            msg_warning!(Message::DataFileMalformed(err.to_string()));
            TaskBook::new()
        }
    }
}

fn init_account_list(storage: &AccountListStorage) -> AccountList {
    match storage.read() {
        Ok(Some(accounts)) => accounts,
        Ok(None) => {
            msg_info!(Message::AccountFileNotFound(storage.file_path().display().to_string()));
            sample_data::sample_account_list()
        }
        Err(err) => {
            msg_warning!(Message::AccountFileMalformed(err.to_string()));
            AccountList::new()
        }
    }
}
