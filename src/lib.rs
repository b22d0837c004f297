#![doc(test(attr(deny(warnings))))]

//! Account Book keeps a small list of bank accounts in a single flat file and
//! offers add, lookup, owner search, and removal on top of it.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use domain::{Account, AccountBook, AccountKind, FIRST_ACCOUNT_NUMBER};
pub use errors::{AccountError, StoreError};
pub use storage::AccountStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Account Book tracing initialized.");
    });
}
