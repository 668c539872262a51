//! Teller-facing operations on top of the account ledger
//!
//! The manager enforces the account-opening policy (date-of-birth window, one
//! account per holder per variant, one Checking-family account per holder) and turns
//! every outcome into the message shown to the teller.

use super::eligibility::{check_calendar_date, check_dob};
use crate::account::{Account, AccountKey, AccountType};
use crate::config::{Config, EligibilityRules};
use crate::date::CalendarDate;
use crate::error::LedgerError;
use crate::ledger::AccountDatabase;
use crate::profile::Profile;
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;

const EMPTY_DATABASE: &str = "Account Database is empty!\n";

/// Ledger plus the policy and clock used to validate requests against it
#[derive(Debug, Clone)]
pub struct TransactionManager {
    database: AccountDatabase,
    rules: EligibilityRules,
    today: CalendarDate,
}

impl TransactionManager {
    /// Manager with default configuration, dated today
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            database: AccountDatabase::with_config(config.ledger),
            rules: config.eligibility,
            today: CalendarDate::today(),
        }
    }

    /// Evaluate ages against a fixed date instead of the system clock
    pub fn on_date(mut self, today: CalendarDate) -> Self {
        self.today = today;
        self
    }

    pub fn database(&self) -> &AccountDatabase {
        &self.database
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Open `account` if its holder is eligible and has no conflicting account
    pub fn open_account(&mut self, account: Account) -> Result<String, LedgerError> {
        let key = account.key();
        check_dob(key.holder.dob(), key.account_type, &self.today, &self.rules)?;

        if self.has_conflicting_account(&key) {
            debug!("rejected duplicate {}", key);
            return Err(LedgerError::DuplicateAccount(key.to_string()));
        }

        let message = format!("{} opened.", key);
        self.database.open(account);
        Ok(message)
    }

    /// Same identity already open, or another Checking-family account for a
    /// Checking-family request
    fn has_conflicting_account(&self, key: &AccountKey<'_>) -> bool {
        if self.database.contains(key) {
            return true;
        }
        key.account_type.is_checking_family()
            && self.database.accounts().iter().any(|stored| {
                stored.account_type().is_checking_family() && stored.holder() == key.holder
            })
    }

    pub fn close_account(&mut self, account_type: AccountType, holder: &Profile) -> Result<String, LedgerError> {
        check_calendar_date(holder.dob(), &self.today)?;
        let key = AccountKey::new(account_type, holder);
        if self.database.close(&key) {
            Ok(format!("{} has been closed.", key))
        } else {
            Err(LedgerError::NotFound(key.to_string()))
        }
    }

    pub fn deposit(
        &mut self,
        account_type: AccountType,
        holder: &Profile,
        amount: Decimal,
    ) -> Result<String, LedgerError> {
        check_calendar_date(holder.dob(), &self.today)?;
        require_positive(amount, "Deposit")?;
        let key = AccountKey::new(account_type, holder);
        self.database.deposit(&key, amount)?;
        Ok(format!("{} Deposit - balance updated.", key))
    }

    pub fn withdraw(
        &mut self,
        account_type: AccountType,
        holder: &Profile,
        amount: Decimal,
    ) -> Result<String, LedgerError> {
        check_calendar_date(holder.dob(), &self.today)?;
        require_positive(amount, "Withdraw")?;
        let key = AccountKey::new(account_type, holder);
        self.database.withdraw(&key, amount)?;
        Ok(format!("{} Withdraw - balance updated.", key))
    }

    /// Accounts in report order
    pub fn sorted_accounts(&mut self) -> &[Account] {
        self.database.sort();
        self.database.accounts()
    }

    /// All accounts sorted by type and holder, with list header and footer
    pub fn display_sorted(&mut self) -> String {
        if self.database.is_empty() {
            return EMPTY_DATABASE.to_string();
        }
        format!(
            "\n*Accounts sorted by account type and profile.\n{}*end of list.\n\n",
            self.database.print_sorted()
        )
    }

    /// Sorted accounts with the fee and interest the next update would apply
    pub fn display_fees_and_interests(&mut self) -> String {
        if self.database.is_empty() {
            return EMPTY_DATABASE.to_string();
        }
        format!(
            "\n*list of accounts with fee and monthly interest.\n{}*end of list.\n",
            self.database.print_fees_and_interests()
        )
    }

    /// Apply the monthly interest and fees, then list the updated accounts
    pub fn update_balances(&mut self) -> String {
        if self.database.is_empty() {
            return EMPTY_DATABASE.to_string();
        }
        format!(
            "\n*list of accounts with fees and interests applied.\n{}*end of list.\n",
            self.database.print_updated_balances()
        )
    }
}

impl Default for TransactionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a teller-entered amount
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(text.trim()).map_err(|_| LedgerError::MalformedInput("Not a valid amount.".to_string()))
}

fn require_positive(amount: Decimal, action: &str) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::MalformedInput(format!(
            "{} - amount cannot be 0 or negative.",
            action
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Campus;
    use rust_decimal_macros::dec;

    fn manager() -> TransactionManager {
        TransactionManager::new().on_date(CalendarDate::new(10, 16, 2026))
    }

    fn student() -> Profile {
        Profile::new("Jane", "Doe", CalendarDate::new(5, 1, 2005))
    }

    fn adult() -> Profile {
        Profile::new("John", "Smith", CalendarDate::new(1, 1, 1990))
    }

    #[test]
    fn test_open_and_duplicate() {
        let mut m = manager();
        assert_eq!(
            m.open_account(Account::checking(adult(), dec!(0))).unwrap(),
            "John Smith 1/1/1990(C) opened."
        );
        assert_eq!(
            m.open_account(Account::checking(adult(), dec!(10))),
            Err(LedgerError::DuplicateAccount("John Smith 1/1/1990(C)".to_string()))
        );
        // A different variant for the same holder is fine.
        assert!(m.open_account(Account::savings(adult(), dec!(0), false)).is_ok());
        assert_eq!(m.database().len(), 2);
    }

    #[test]
    fn test_one_checking_family_account_per_holder() {
        let mut m = manager();
        m.open_account(Account::college_checking(student(), dec!(0), Campus::Newark))
            .unwrap();
        let err = m.open_account(Account::checking(student(), dec!(0))).unwrap_err();
        assert_eq!(err.to_string(), "Jane Doe 5/1/2005(C) is already in the database.");
    }

    #[test]
    fn test_open_rejects_ineligible_dob() {
        let mut m = manager();
        let err = m.open_account(Account::college_checking(adult(), dec!(0), Campus::Camden)).unwrap_err();
        assert_eq!(err.to_string(), "DOB invalid: user over 24.");

        let child = Profile::new("Kid", "Doe", CalendarDate::new(1, 1, 2015));
        let err = m.open_account(Account::savings(child, dec!(0), false)).unwrap_err();
        assert_eq!(err.to_string(), "DOB invalid: user under 16.");

        let bogus = Profile::new("No", "Body", CalendarDate::new(2, 29, 2001));
        let err = m.open_account(Account::checking(bogus, dec!(0))).unwrap_err();
        assert_eq!(err.to_string(), "DOB invalid: is not a valid calendar date.");
        assert!(m.database().is_empty());
    }

    #[test]
    fn test_deposit_withdraw_messages() {
        let mut m = manager();
        m.open_account(Account::money_market(adult(), dec!(0), true)).unwrap();

        assert_eq!(
            m.deposit(AccountType::MoneyMarket, &adult(), dec!(2500)).unwrap(),
            "John Smith 1/1/1990(MM) Deposit - balance updated."
        );
        assert_eq!(
            m.withdraw(AccountType::MoneyMarket, &adult(), dec!(3000)).unwrap_err().to_string(),
            "John Smith 1/1/1990(MM) Withdraw - insufficient fund."
        );
        assert_eq!(
            m.withdraw(AccountType::MoneyMarket, &adult(), dec!(600)).unwrap(),
            "John Smith 1/1/1990(MM) Withdraw - balance updated."
        );
        assert_eq!(m.database().accounts()[0].balance(), dec!(1900));
        assert_eq!(m.database().accounts()[0].is_loyal(), Some(false));
    }

    #[test]
    fn test_amount_checks() {
        let mut m = manager();
        m.open_account(Account::checking(adult(), dec!(0))).unwrap();

        assert_eq!(
            m.deposit(AccountType::Checking, &adult(), dec!(0)).unwrap_err().to_string(),
            "Deposit - amount cannot be 0 or negative."
        );
        assert_eq!(
            m.withdraw(AccountType::Checking, &adult(), dec!(-5)).unwrap_err().to_string(),
            "Withdraw - amount cannot be 0 or negative."
        );
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("abc").unwrap_err().to_string(), "Not a valid amount.");
    }

    #[test]
    fn test_close() {
        let mut m = manager();
        m.open_account(Account::savings(adult(), dec!(0), true)).unwrap();

        assert_eq!(
            m.close_account(AccountType::Checking, &adult()).unwrap_err().to_string(),
            "John Smith 1/1/1990(C) is not in the database."
        );
        assert_eq!(
            m.close_account(AccountType::Savings, &adult()).unwrap(),
            "John Smith 1/1/1990(S) has been closed."
        );
        assert!(m.database().is_empty());
    }

    #[test]
    fn test_reports() {
        let mut m = manager();
        assert_eq!(m.display_sorted(), "Account Database is empty!\n");

        m.open_account(Account::checking(adult(), dec!(500))).unwrap();
        assert_eq!(
            m.display_sorted(),
            "\n*Accounts sorted by account type and profile.\n\
             Checking::John Smith 1/1/1990::Balance $500.00\n\
             *end of list.\n\n"
        );
        assert!(m
            .display_fees_and_interests()
            .contains("::fee $12.00::monthly interest $0.42\n"));

        let updated = m.update_balances();
        assert!(updated.contains("Checking::John Smith 1/1/1990::Balance $488.42\n"));
    }
}
