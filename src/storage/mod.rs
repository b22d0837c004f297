pub mod account_store;
pub mod json_backend;

pub use account_store::AccountStore;
pub use json_backend::{
    load_book_from_path, save_book_to_path, AccountRecord, BookSnapshot, ACCOUNT_SCHEMA_VERSION,
};
