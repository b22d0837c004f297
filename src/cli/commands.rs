use std::str::FromStr;

use strsim::levenshtein;
use thiserror::Error;

use crate::{
    domain::Account,
    errors::StoreError,
    storage::AccountStore,
};

use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CommandResult = Result<LoopControl, CommandError>;

pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        usage: "help [command]",
        description: "Show available commands",
    },
    CommandEntry {
        name: "count",
        usage: "count",
        description: "Show how many accounts are stored",
    },
    CommandEntry {
        name: "list",
        usage: "list",
        description: "List every account in opening order",
    },
    CommandEntry {
        name: "add",
        usage: "add <owner> <password> <balance>",
        description: "Open a general account",
    },
    CommandEntry {
        name: "add-minus",
        usage: "add-minus <owner> <password> <balance> <limit>",
        description: "Open a minus account with an overdraft limit",
    },
    CommandEntry {
        name: "find",
        usage: "find <number>",
        description: "Look up an account by number",
    },
    CommandEntry {
        name: "owner",
        usage: "owner <name>",
        description: "List accounts held by an owner",
    },
    CommandEntry {
        name: "remove",
        usage: "remove <number>",
        description: "Close an account",
    },
    CommandEntry {
        name: "exit",
        usage: "exit",
        description: "Leave the shell",
    },
];

/// State shared by every command for the lifetime of the shell.
pub struct ShellContext {
    pub store: AccountStore,
    pub currency: String,
    pub mode: CliMode,
    pub running: bool,
}

impl ShellContext {
    pub fn new(store: AccountStore, currency: impl Into<String>, mode: CliMode) -> Self {
        Self {
            store,
            currency: currency.into(),
            mode,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("account-book ({})> ", self.store.count())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|entry| entry.name).collect()
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match command {
            "help" => self.cmd_help(args),
            "count" => self.cmd_count(),
            "list" => self.cmd_list(),
            "add" => self.cmd_add(args),
            "add-minus" => self.cmd_add_minus(args),
            "find" => self.cmd_find(args),
            "owner" => self.cmd_owner(args),
            "remove" => self.cmd_remove(args),
            "exit" | "quit" => Ok(LoopControl::Exit),
            other => {
                self.suggest_command(other);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                if self.mode == CliMode::Interactive {
                    output::info("Use `help <command>` for usage details.");
                }
            }
            CommandError::Store(err) => output::error(err),
        }
    }

    fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        let best = COMMANDS
            .iter()
            .map(|entry| (levenshtein(entry.name, input), entry.name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    fn cmd_help(&self, args: &[&str]) -> CommandResult {
        if let Some(name) = args.first() {
            match COMMANDS.iter().find(|entry| entry.name == *name) {
                Some(entry) => output::info(format!("{} - {}", entry.usage, entry.description)),
                None => self.suggest_command(name),
            }
            return Ok(LoopControl::Continue);
        }
        output::section("Commands");
        for entry in COMMANDS {
            output::row(format!("{:<48}{}", entry.usage, entry.description));
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_count(&self) -> CommandResult {
        output::info(format!("{} account(s) on file.", self.store.count()));
        Ok(LoopControl::Continue)
    }

    fn cmd_list(&self) -> CommandResult {
        if self.store.count() == 0 {
            output::info("No accounts on file.");
            return Ok(LoopControl::Continue);
        }
        output::section(format!("Accounts ({})", self.currency));
        for account in self.store.list() {
            output::row(account);
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_add(&mut self, args: &[&str]) -> CommandResult {
        let [owner, password, balance] = args else {
            return Err(usage_error("add"));
        };
        let account = Account::new(
            *owner,
            parse_arg(password, "password")?,
            parse_arg(balance, "balance")?,
        );
        self.open_account(account)
    }

    fn cmd_add_minus(&mut self, args: &[&str]) -> CommandResult {
        let [owner, password, balance, limit] = args else {
            return Err(usage_error("add-minus"));
        };
        let limit: i64 = parse_arg(limit, "limit")?;
        if limit < 0 {
            return Err(CommandError::InvalidArguments(
                "limit must not be negative".into(),
            ));
        }
        let account = Account::minus(
            *owner,
            parse_arg(password, "password")?,
            parse_arg(balance, "balance")?,
            limit,
        );
        self.open_account(account)
    }

    fn open_account(&mut self, account: Account) -> CommandResult {
        let owner = account.owner.clone();
        let number = self.store.add(account)?;
        output::success(format!("Account {} opened for {}.", number, owner));
        Ok(LoopControl::Continue)
    }

    fn cmd_find(&self, args: &[&str]) -> CommandResult {
        let [number] = args else {
            return Err(usage_error("find"));
        };
        match self.store.search_by_number(number) {
            Some(account) => output::row(account),
            None => output::warning(format!("Account {} not found.", number)),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_owner(&self, args: &[&str]) -> CommandResult {
        let [name] = args else {
            return Err(usage_error("owner"));
        };
        let matches = self.store.search_by_owner(name);
        if matches.is_empty() {
            output::warning(format!("No accounts held by {}.", name));
        } else {
            output::section(format!("Accounts held by {}", name));
            for account in matches {
                output::row(account);
            }
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_remove(&mut self, args: &[&str]) -> CommandResult {
        let [number] = args else {
            return Err(usage_error("remove"));
        };
        if self.store.remove(number)? {
            output::success(format!("Account {} removed.", number));
        } else {
            output::warning(format!("Account {} not found.", number));
        }
        Ok(LoopControl::Continue)
    }
}

fn usage_error(name: &str) -> CommandError {
    let usage = COMMANDS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.usage)
        .unwrap_or(name);
    CommandError::InvalidArguments(format!("Usage: {}", usage))
}

fn parse_arg<T: FromStr>(raw: &str, field: &str) -> Result<T, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {}: `{}`", field, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = AccountStore::open(temp.path().join("accounts.dbf")).expect("open store");
        (ShellContext::new(store, "KRW", CliMode::Script), temp)
    }

    #[test]
    fn add_commands_open_accounts() {
        let (mut ctx, _guard) = context();
        ctx.dispatch("add", &["Alice", "1111", "10000"]).expect("add");
        ctx.dispatch("add-minus", &["Bob", "2222", "0", "50000"])
            .expect("add-minus");
        assert_eq!(ctx.store.count(), 2);
        let bob = ctx.store.search_by_number("1001").expect("bob");
        assert_eq!(bob.limit(), Some(50000));
    }

    #[test]
    fn wrong_arity_is_reported_as_usage() {
        let (mut ctx, _guard) = context();
        let err = ctx.dispatch("add", &["Alice"]).unwrap_err();
        assert!(err.to_string().starts_with("Usage: add <owner>"));
        assert_eq!(ctx.store.count(), 0);
    }

    #[test]
    fn non_numeric_balance_is_rejected() {
        let (mut ctx, _guard) = context();
        let err = ctx.dispatch("add", &["Alice", "1111", "lots"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn negative_limit_is_rejected() {
        let (mut ctx, _guard) = context();
        assert!(ctx.dispatch("add-minus", &["Bob", "1", "0", "-5"]).is_err());
    }

    #[test]
    fn remove_and_exit_flow() {
        let (mut ctx, _guard) = context();
        ctx.dispatch("add", &["Alice", "1111", "1"]).expect("add");
        ctx.dispatch("remove", &["1000"]).expect("remove");
        ctx.dispatch("remove", &["1000"]).expect("remove again");
        assert_eq!(ctx.store.count(), 0);
        assert_eq!(ctx.dispatch("exit", &[]).expect("exit"), LoopControl::Exit);
        assert_eq!(
            ctx.dispatch("lsit", &[]).expect("unknown"),
            LoopControl::Continue
        );
    }
}
