use std::result::Result as StdResult;

use thiserror::Error;

/// Failures raised while opening or persisting an account store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported schema version {found} (supported up to {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
    #[error("Corrupt account file: {0}")]
    Corrupt(String),
    #[error("Account store is closed")]
    Closed,
    #[error("Account numbers exhausted")]
    Exhausted,
}

pub type Result<T> = StdResult<T, StoreError>;

/// Rejections from balance operations on a single account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(i64),
    #[error("Insufficient funds: balance {balance}, requested {requested}, floor {floor}")]
    InsufficientFunds {
        balance: i64,
        requested: i64,
        floor: i64,
    },
}

/// Configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
