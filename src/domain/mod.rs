pub mod account;
pub mod book;

pub use account::{Account, AccountKind};
pub use book::{AccountBook, FIRST_ACCOUNT_NUMBER};
