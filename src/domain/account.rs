use std::fmt;

use crate::errors::AccountError;

/// A bank account held in the book. The number is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub number: String,
    pub owner: String,
    pub password: u32,
    pub balance: i64,
    pub kind: AccountKind,
}

/// Distinguishes plain deposit accounts from overdraft-capable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    General,
    Minus { limit: i64 },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::General => "General",
            AccountKind::Minus { .. } => "Minus",
        }
    }
}

impl Account {
    /// Creates a general account. The number stays empty until the account is added to a store.
    pub fn new(owner: impl Into<String>, password: u32, balance: i64) -> Self {
        Self {
            number: String::new(),
            owner: owner.into(),
            password,
            balance,
            kind: AccountKind::General,
        }
    }

    /// Creates a minus account that may be overdrawn down to `-limit`.
    pub fn minus(owner: impl Into<String>, password: u32, balance: i64, limit: i64) -> Self {
        Self {
            kind: AccountKind::Minus { limit },
            ..Self::new(owner, password, balance)
        }
    }

    pub fn limit(&self) -> Option<i64> {
        match self.kind {
            AccountKind::General => None,
            AccountKind::Minus { limit } => Some(limit),
        }
    }

    pub fn is_minus(&self) -> bool {
        matches!(self.kind, AccountKind::Minus { .. })
    }

    pub fn check_password(&self, pin: u32) -> bool {
        self.password == pin
    }

    /// Adds funds and returns the new balance.
    pub fn deposit(&mut self, amount: i64) -> Result<i64, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Removes funds without crossing the account's floor and returns the new balance.
    pub fn withdraw(&mut self, amount: i64) -> Result<i64, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        let floor = -self.limit().unwrap_or(0);
        if self.balance - amount < floor {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
                floor,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8}{:>6}  {:<12}{:>12}",
            self.kind.label(),
            self.number,
            self.owner,
            self.balance
        )?;
        if let Some(limit) = self.limit() {
            write!(f, "  limit {}", limit)?;
        }
        Ok(())
    }
}
