//! Accounts and the account list, the task book's companion aggregate.
//!
//! Persisted alongside the task book in the same pattern: validated
//! scalar fields, a uniqueness rule (one account per username), and a
//! JSON storage module with the same absent/malformed handling.

use thiserror::Error;

pub const USERNAME_CONSTRAINTS: &str = "Usernames should be alphanumeric and non-empty";
pub const PASSWORD_CONSTRAINTS: &str = "Passwords should not be blank";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Operation would result in duplicate accounts")]
    DuplicateAccount,
    #[error("{0}")]
    InvalidField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: &str, password: &str) -> Result<Self, AccountError> {
        if !Self::is_valid_username(username) {
            return Err(AccountError::InvalidField(USERNAME_CONSTRAINTS.to_string()));
        }
        if !Self::is_valid_password(password) {
            return Err(AccountError::InvalidField(PASSWORD_CONSTRAINTS.to_string()));
        }
        Ok(Account {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn is_valid_username(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn is_valid_password(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Identity rule for accounts: same username.
    pub fn is_same_account(&self, other: &Account) -> bool {
        self.username == other.username
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountList {
    accounts: Vec<Account>,
}

impl AccountList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_account(&self, account: &Account) -> bool {
        self.accounts.iter().any(|a| a.is_same_account(account))
    }

    pub fn add_account(&mut self, account: Account) -> Result<(), AccountError> {
        if self.has_account(&account) {
            return Err(AccountError::DuplicateAccount);
        }
        self.accounts.push(account);
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn reset_data(&mut self, other: &AccountList) {
        self.accounts = other.accounts.clone();
    }
}
