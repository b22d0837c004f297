use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".account_book";
const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "accounts.dbf";
pub const HOME_ENV: &str = "ACCOUNT_BOOK_HOME";

/// Returns the application data directory, defaulting to `~/.account_book`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
