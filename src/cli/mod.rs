//! Line-oriented shell over an [`AccountStore`](crate::storage::AccountStore).

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::{CliMode, CommandError, LoopControl, ShellContext};
pub use shell::run_cli;
