#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskDeleted(String),
    TaskEdited(String),
    DuplicateTask,
    InvalidTaskIndex(usize),
    TasksListed(usize),
    TasksListedOnDate(usize, String), // count, selector
    TasksFound(usize),

    // === CLEAR MESSAGES ===
    TaskBookCleared, // "Tasketch has been cleared!"
    ClearedOnDate(usize, String),  // count, selector
    ClearedBefore(usize, String),  // count, reference date

    // === HISTORY MESSAGES ===
    UndoSuccess,
    RedoSuccess,
    NothingToUndo,
    NothingToRedo,

    // === PARSER MESSAGES ===
    UnknownCommand(String),
    InvalidCommandFormat(String), // usage text
    InvalidField(String),         // constraint message

    // === STORAGE MESSAGES ===
    DataFileNotFound(String),     // path; starting with sample data
    DataFileMalformed(String),    // reason; starting with empty data
    DataFileUnreadable(String),   // reason; starting with empty data
    DataSaveFailed(String),       // reason
    AccountFileNotFound(String),
    AccountFileMalformed(String),

    // === SHELL MESSAGES ===
    Welcome,
    Goodbye,
}
