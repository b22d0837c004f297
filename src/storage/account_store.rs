use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    domain::{Account, AccountBook},
    errors::{Result, StoreError},
};

use super::json_backend::{load_book_from_path, save_book_to_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreState {
    Open,
    Closed,
}

/// File-backed account repository. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    book: AccountBook,
    state: StoreState,
}

impl AccountStore {
    /// Loads the book at `path`, or starts empty when the file does not exist yet.
    ///
    /// A file that exists but cannot be read or decoded is an error; there is
    /// no partial recovery.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let book = if path.exists() {
            let book = load_book_from_path(&path)?;
            debug!(
                path = %path.display(),
                accounts = book.accounts.len(),
                next_number = book.next_number,
                "loaded account book"
            );
            book
        } else {
            debug!(path = %path.display(), "no account file yet, starting empty");
            AccountBook::new()
        };
        Ok(Self {
            path,
            book,
            state: StoreState::Open,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &AccountBook {
        &self.book
    }

    pub fn count(&self) -> usize {
        self.book.accounts.len()
    }

    pub fn list(&self) -> &[Account] {
        &self.book.accounts
    }

    /// Number the next successful `add` will assign.
    pub fn next_number(&self) -> u32 {
        self.book.next_number
    }

    pub fn is_closed(&self) -> bool {
        self.state == StoreState::Closed
    }

    /// Assigns the next account number, appends the account and persists.
    ///
    /// If persisting fails the account stays in memory and the error is returned.
    pub fn add(&mut self, account: Account) -> Result<String> {
        self.ensure_open()?;
        let number = self.book.insert(account).ok_or(StoreError::Exhausted)?;
        info!(number = %number, "account added");
        self.persist()?;
        Ok(number)
    }

    pub fn search_by_number(&self, number: &str) -> Option<&Account> {
        self.book.find(number)
    }

    pub fn search_by_owner(&self, owner: &str) -> Vec<&Account> {
        self.book.by_owner(owner)
    }

    /// Removes the first account with `number`. Returns `Ok(false)` without
    /// touching the file when no such account exists.
    pub fn remove(&mut self, number: &str) -> Result<bool> {
        self.ensure_open()?;
        match self.book.take(number) {
            Some(_) => {
                info!(number = %number, "account removed");
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes the full book to the backing file.
    pub fn persist(&self) -> Result<()> {
        self.ensure_open()?;
        save_book_to_path(&self.book, &self.path)?;
        debug!(
            path = %self.path.display(),
            accounts = self.book.accounts.len(),
            "account book persisted"
        );
        Ok(())
    }

    /// Flushes the backing file to disk and rejects further mutations.
    /// Calling it again is a no-op; I/O errors are logged, not returned.
    pub fn close(&mut self) {
        if self.state == StoreState::Closed {
            return;
        }
        self.state = StoreState::Closed;
        if !self.path.exists() {
            return;
        }
        let synced = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .and_then(|file| file.sync_all());
        if let Err(err) = synced {
            warn!(path = %self.path.display(), error = %err, "failed to sync account file on close");
        }
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            StoreState::Open => Ok(()),
            StoreState::Closed => Err(StoreError::Closed),
        }
    }
}
