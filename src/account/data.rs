//! Account records and their identity

use super::money::format_currency;
use super::rates::MONEY_MARKET_LOYALTY_BALANCE;
use super::Campus;
use crate::error::LedgerError;
use crate::profile::Profile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four account variants, without their per-account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    CollegeChecking,
    MoneyMarket,
    Savings,
}

impl AccountType {
    /// Parse a batch type code (`C`, `CC`, `S`, `MM`)
    pub fn from_initial(code: &str) -> Option<Self> {
        match code {
            "C" => Some(AccountType::Checking),
            "CC" => Some(AccountType::CollegeChecking),
            "S" => Some(AccountType::Savings),
            "MM" => Some(AccountType::MoneyMarket),
            _ => None,
        }
    }

    pub fn initial(&self) -> &'static str {
        match self {
            AccountType::Checking => "C",
            AccountType::CollegeChecking => "CC",
            AccountType::Savings => "S",
            AccountType::MoneyMarket => "MM",
        }
    }

    /// Display name; report ordering compares these strings
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::CollegeChecking => "College Checking",
            AccountType::Savings => "Savings",
            AccountType::MoneyMarket => "Money Market",
        }
    }

    /// Checking and College Checking share the one-per-holder rule
    pub fn is_checking_family(&self) -> bool {
        matches!(self, AccountType::Checking | AccountType::CollegeChecking)
    }
}

/// Variant-specific account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountKind {
    Checking,
    CollegeChecking {
        campus: Campus,
    },
    Savings {
        loyal: bool,
    },
    MoneyMarket {
        loyal: bool,
        /// Withdrawals made since the last monthly update
        withdrawals: u32,
    },
}

impl AccountKind {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountKind::Checking => AccountType::Checking,
            AccountKind::CollegeChecking { .. } => AccountType::CollegeChecking,
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::MoneyMarket { .. } => AccountType::MoneyMarket,
        }
    }
}

/// Identity used to look an account up: variant plus holder, never balance
#[derive(Debug, Clone, Copy)]
pub struct AccountKey<'a> {
    pub account_type: AccountType,
    pub holder: &'a Profile,
}

impl<'a> AccountKey<'a> {
    pub fn new(account_type: AccountType, holder: &'a Profile) -> Self {
        Self { account_type, holder }
    }

    /// Whether a stored account has this identity
    pub fn matches(&self, stored: &Account) -> bool {
        stored.account_type() == self.account_type && stored.holder() == self.holder
    }
}

impl fmt::Display for AccountKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.holder, self.account_type.initial())
    }
}

/// One customer account held by the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    holder: Profile,
    balance: Decimal,
    #[serde(flatten)]
    kind: AccountKind,
}

impl Account {
    pub fn new(holder: Profile, balance: Decimal, kind: AccountKind) -> Self {
        Self { holder, balance, kind }
    }

    pub fn checking(holder: Profile, balance: Decimal) -> Self {
        Self::new(holder, balance, AccountKind::Checking)
    }

    pub fn college_checking(holder: Profile, balance: Decimal, campus: Campus) -> Self {
        Self::new(holder, balance, AccountKind::CollegeChecking { campus })
    }

    pub fn savings(holder: Profile, balance: Decimal, loyal: bool) -> Self {
        Self::new(holder, balance, AccountKind::Savings { loyal })
    }

    pub fn money_market(holder: Profile, balance: Decimal, loyal: bool) -> Self {
        Self::new(holder, balance, AccountKind::MoneyMarket { loyal, withdrawals: 0 })
    }

    pub fn holder(&self) -> &Profile {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    pub fn key(&self) -> AccountKey<'_> {
        AccountKey::new(self.account_type(), &self.holder)
    }

    pub fn type_initial(&self) -> &'static str {
        self.account_type().initial()
    }

    pub fn type_label(&self) -> &'static str {
        self.account_type().label()
    }

    /// Campus code for College Checking accounts
    pub fn campus_code(&self) -> Option<u8> {
        match self.kind {
            AccountKind::CollegeChecking { campus } => Some(campus.code()),
            _ => None,
        }
    }

    /// Loyalty flag for Savings and Money Market accounts
    pub fn is_loyal(&self) -> Option<bool> {
        match self.kind {
            AccountKind::Savings { loyal } | AccountKind::MoneyMarket { loyal, .. } => Some(loyal),
            _ => None,
        }
    }

    /// Withdrawals this period, Money Market only
    pub fn withdrawals(&self) -> Option<u32> {
        match self.kind {
            AccountKind::MoneyMarket { withdrawals, .. } => Some(withdrawals),
            _ => None,
        }
    }

    /// Interest that the next monthly update would credit
    pub fn interest(&self) -> Decimal {
        self.kind.monthly_interest_on(self.balance)
    }

    /// Fee that the next monthly update would charge
    pub fn fee(&self) -> Decimal {
        self.kind.monthly_fee_on(self.balance)
    }

    /// Credit this month's interest; returns the new balance
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn monthly_interest(&mut self) -> Decimal {
        let interest = self.interest();
        self.balance = self.balance.saturating_add(interest);
        self.balance
    }

    /// Charge this month's fee, if any; returns the new balance
    pub fn monthly_fee(&mut self) -> Decimal {
        let fee = self.fee();
        self.balance = self.balance.saturating_sub(fee);
        self.balance
    }

    /// Add `amount`, refusing a deposit the balance cannot represent
    pub(crate) fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::MalformedInput("Not a valid amount.".to_string()))?;
        self.refresh_loyalty();
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
        self.refresh_loyalty();
        if let AccountKind::MoneyMarket { withdrawals, .. } = &mut self.kind {
            *withdrawals += 1;
        }
    }

    /// Money Market holders are loyal exactly while the balance is at least $2,000
    fn refresh_loyalty(&mut self) {
        if let AccountKind::MoneyMarket { loyal, .. } = &mut self.kind {
            *loyal = self.balance >= MONEY_MARKET_LOYALTY_BALANCE;
        }
    }

    pub(crate) fn reset_withdrawals(&mut self) {
        if let AccountKind::MoneyMarket { withdrawals, .. } = &mut self.kind {
            *withdrawals = 0;
        }
    }

    /// Listing line followed by the previewed fee and interest
    pub fn render_fees_interest(&self) -> String {
        format!(
            "{}::fee ${}::monthly interest ${}",
            self,
            format_currency(self.fee()),
            format_currency(self.interest())
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let balance = format_currency(self.balance);
        match self.kind {
            AccountKind::Checking => {
                write!(f, "Checking::{}::Balance ${}", self.holder, balance)
            }
            AccountKind::CollegeChecking { campus } => {
                write!(f, "College Checking::{}::Balance ${}::{}", self.holder, balance, campus)
            }
            AccountKind::Savings { loyal } => {
                write!(f, "Savings::{}::Balance ${}", self.holder, balance)?;
                if loyal {
                    f.write_str("::is loyal")?;
                }
                Ok(())
            }
            AccountKind::MoneyMarket { loyal, withdrawals } => {
                write!(f, "Money Market::Savings::{}::Balance ${}", self.holder, balance)?;
                if loyal {
                    f.write_str("::is loyal")?;
                }
                write!(f, "::withdrawal: {}", withdrawals)
            }
        }
    }
}
