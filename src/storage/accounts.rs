//! JSON storage for the account list, same pattern as the task book.

use super::StorageError;
use crate::model::account::{Account, AccountList};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct JsonSerializableAccountList {
    #[serde(default)]
    accounts: Vec<JsonAdaptedAccount>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonAdaptedAccount {
    username: Option<String>,
    password: Option<String>,
}

impl JsonAdaptedAccount {
    fn from_model(source: &Account) -> Self {
        JsonAdaptedAccount {
            username: Some(source.username.clone()),
            password: Some(source.password.clone()),
        }
    }

    fn to_model(&self) -> Result<Account, StorageError> {
        let username = self
            .username
            .as_deref()
            .ok_or(StorageError::MissingField("Account", "username"))?;
        let password = self
            .password
            .as_deref()
            .ok_or(StorageError::MissingField("Account", "password"))?;
        Account::new(username, password).map_err(|e| StorageError::InvalidField(e.to_string()))
    }
}

pub struct AccountListStorage {
    file_path: PathBuf,
}

impl AccountListStorage {
    pub fn new(file_path: PathBuf) -> Self {
        AccountListStorage { file_path }
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    pub fn read(&self) -> Result<Option<AccountList>, StorageError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.file_path)?;
        let document: JsonSerializableAccountList = serde_json::from_str(&raw)?;

        let mut list = AccountList::new();
        for adapted in &document.accounts {
            list.add_account(adapted.to_model()?)
                .map_err(|_| StorageError::DuplicateEntry)?;
        }
        Ok(Some(list))
    }

    pub fn save(&self, accounts: &AccountList) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = JsonSerializableAccountList {
            accounts: accounts.accounts().iter().map(JsonAdaptedAccount::from_model).collect(),
        };
        let file = fs::File::create(&self.file_path)?;
        serde_json::to_writer_pretty(&file, &document)?;
        Ok(())
    }
}
