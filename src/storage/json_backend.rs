use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    domain::{Account, AccountBook, AccountKind},
    errors::{Result, StoreError},
    utils::persistence::replace_file,
};

pub const ACCOUNT_SCHEMA_VERSION: u32 = 1;

/// On-disk document holding a full account book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    pub accounts: Vec<AccountRecord>,
    pub next_number: u32,
}

/// Tagged account record; kept separate from [`Account`] so the file layout
/// does not follow in-memory refactors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountRecord {
    General {
        number: String,
        owner: String,
        password: u32,
        balance: i64,
    },
    Minus {
        number: String,
        owner: String,
        password: u32,
        balance: i64,
        limit: i64,
    },
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        let number = account.number.clone();
        let owner = account.owner.clone();
        match account.kind {
            AccountKind::General => AccountRecord::General {
                number,
                owner,
                password: account.password,
                balance: account.balance,
            },
            AccountKind::Minus { limit } => AccountRecord::Minus {
                number,
                owner,
                password: account.password,
                balance: account.balance,
                limit,
            },
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        match record {
            AccountRecord::General {
                number,
                owner,
                password,
                balance,
            } => Account {
                number,
                owner,
                password,
                balance,
                kind: AccountKind::General,
            },
            AccountRecord::Minus {
                number,
                owner,
                password,
                balance,
                limit,
            } => Account {
                number,
                owner,
                password,
                balance,
                kind: AccountKind::Minus { limit },
            },
        }
    }
}

impl BookSnapshot {
    pub fn from_book(book: &AccountBook) -> Self {
        Self {
            schema_version: ACCOUNT_SCHEMA_VERSION,
            saved_at: Some(Utc::now()),
            accounts: book.accounts.iter().map(AccountRecord::from).collect(),
            next_number: book.next_number,
        }
    }

    pub fn into_book(self) -> Result<AccountBook> {
        if self.schema_version > ACCOUNT_SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema {
                found: self.schema_version,
                supported: ACCOUNT_SCHEMA_VERSION,
            });
        }
        let book = AccountBook {
            accounts: self.accounts.into_iter().map(Account::from).collect(),
            next_number: self.next_number,
        };
        book.validate().map_err(StoreError::Corrupt)?;
        Ok(book)
    }
}

/// Overwrites `path` with the full book, staging through a sibling temp file.
pub fn save_book_to_path(book: &AccountBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&BookSnapshot::from_book(book))?;
    replace_file(path, &json)?;
    Ok(())
}

pub fn load_book_from_path(path: &Path) -> Result<AccountBook> {
    let data = fs::read_to_string(path)?;
    let snapshot: BookSnapshot = serde_json::from_str(&data)?;
    snapshot.into_book()
}
