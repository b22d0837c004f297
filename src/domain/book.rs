use crate::domain::account::Account;

/// Account numbers are handed out sequentially from this value.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// In-memory snapshot of every stored account plus the numbering counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBook {
    pub accounts: Vec<Account>,
    pub next_number: u32,
}

impl Default for AccountBook {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
        }
    }
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the next number onto `account`, appends it, and returns the number.
    ///
    /// Returns `None` and leaves the book untouched once the counter reaches
    /// `u32::MAX`; that value is never issued.
    pub fn insert(&mut self, mut account: Account) -> Option<String> {
        let following = self.next_number.checked_add(1)?;
        let number = self.next_number.to_string();
        account.number = number.clone();
        self.accounts.push(account);
        self.next_number = following;
        Some(number)
    }

    pub fn find(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    pub fn by_owner(&self, owner: &str) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.owner == owner)
            .collect()
    }

    /// Removes the first account with `number`, returning it when present.
    pub fn take(&mut self, number: &str) -> Option<Account> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.number == number)?;
        Some(self.accounts.remove(index))
    }

    /// Checks the numbering invariants of a book read from disk.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for account in &self.accounts {
            if !seen.insert(account.number.as_str()) {
                return Err(format!("duplicate account number {}", account.number));
            }
            let parsed: u32 = account
                .number
                .parse()
                .map_err(|_| format!("account number `{}` is not numeric", account.number))?;
            if parsed < FIRST_ACCOUNT_NUMBER || parsed >= self.next_number {
                return Err(format!(
                    "account number {} outside issued range {}..{}",
                    parsed, FIRST_ACCOUNT_NUMBER, self.next_number
                ));
            }
        }
        if self.next_number < FIRST_ACCOUNT_NUMBER {
            return Err(format!(
                "next account number {} below {}",
                self.next_number, FIRST_ACCOUNT_NUMBER
            ));
        }
        Ok(())
    }
}
