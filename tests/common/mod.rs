use std::{path::PathBuf, sync::Mutex};

use account_book::AccountStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh `accounts.dbf` path inside its own temporary directory.
pub fn temp_store_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("accounts.dbf");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens an empty store backed by a unique temporary file.
#[allow(dead_code)]
pub fn setup_store() -> AccountStore {
    AccountStore::open(temp_store_path()).expect("open account store")
}
