//! In-memory account ledger

use super::sort::{compare_accounts, insertion_sort_by};
use crate::account::{Account, AccountKey};
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use log::debug;
use rust_decimal::Decimal;

/// Growable, ordered store of accounts
///
/// Lookups are linear scans on account identity (variant plus holder). Storage grows by
/// a fixed number of slots when full, and `capacity()` reports the slot count.
#[derive(Debug, Clone)]
pub struct AccountDatabase {
    accounts: Vec<Account>,
    capacity: usize,
    growth_increment: usize,
}

impl AccountDatabase {
    /// Empty ledger with 4 slots, growing by 4
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            accounts: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            growth_increment: config.growth_increment.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Accounts in their current order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    /// Position of the account with this identity
    pub fn find(&self, key: &AccountKey<'_>) -> Option<usize> {
        self.accounts.iter().position(|account| key.matches(account))
    }

    pub fn contains(&self, key: &AccountKey<'_>) -> bool {
        self.find(key).is_some()
    }

    fn grow(&mut self) {
        self.capacity += self.growth_increment;
        self.accounts.reserve_exact(self.capacity - self.accounts.len());
        debug!("ledger grown to {} slots", self.capacity);
    }

    /// Append an account; duplicates are the caller's concern (check `contains` first)
    pub fn open(&mut self, account: Account) -> bool {
        if self.accounts.len() >= self.capacity {
            self.grow();
        }
        debug!("opened {}", account.key());
        self.accounts.push(account);
        true
    }

    /// Remove the account with this identity, keeping the others in order
    pub fn close(&mut self, key: &AccountKey<'_>) -> bool {
        match self.find(key) {
            Some(index) => {
                let removed = self.accounts.remove(index);
                debug!("closed {}", removed.key());
                true
            }
            None => false,
        }
    }

    /// Add `amount` to the stored account; returns the new balance
    ///
    /// A deposit that would overflow the balance is refused and changes nothing.
    pub fn deposit(&mut self, key: &AccountKey<'_>, amount: Decimal) -> Result<Decimal, LedgerError> {
        let index = self
            .find(key)
            .ok_or_else(|| LedgerError::NotFound(key.to_string()))?;
        let account = &mut self.accounts[index];
        account.credit(amount)?;
        debug!("deposited {} to {}", amount, key);
        Ok(account.balance())
    }

    /// Take `amount` from the stored account if it covers it; returns the new balance
    ///
    /// An overdraw leaves the account untouched.
    pub fn withdraw(&mut self, key: &AccountKey<'_>, amount: Decimal) -> Result<Decimal, LedgerError> {
        let index = self
            .find(key)
            .ok_or_else(|| LedgerError::NotFound(key.to_string()))?;
        let account = &mut self.accounts[index];
        if amount > account.balance() {
            return Err(LedgerError::InsufficientFunds(key.to_string()));
        }
        account.debit(amount);
        debug!("withdrew {} from {}", amount, key);
        Ok(account.balance())
    }

    /// Order by account type label, then holder
    pub fn sort(&mut self) {
        insertion_sort_by(&mut self.accounts, compare_accounts);
    }

    /// Sorted listing, one account per line
    pub fn print_sorted(&mut self) -> String {
        self.sort();
        self.accounts.iter().map(|account| format!("{}\n", account)).collect()
    }

    /// Sorted listing with each account's upcoming fee and interest
    pub fn print_fees_and_interests(&mut self) -> String {
        self.sort();
        self.accounts
            .iter()
            .map(|account| format!("{}\n", account.render_fees_interest()))
            .collect()
    }

    /// Apply the month's interest and then its fee to every account, and list the result
    ///
    /// Interest goes first so that it can lift a balance over a fee waiver threshold.
    /// Money Market withdrawal counts start over afterwards.
    pub fn print_updated_balances(&mut self) -> String {
        self.sort();
        let mut output = String::new();
        for account in &mut self.accounts {
            account.monthly_interest();
            account.monthly_fee();
            account.reset_withdrawals();
            output.push_str(&account.to_string());
            output.push('\n');
        }
        output
    }
}

impl Default for AccountDatabase {
    fn default() -> Self {
        Self::new()
    }
}
