//! Bank Ledger - in-memory account ledger for a small retail bank
//!
//! This library provides:
//! - Calendar dates and account holder identities
//! - Checking, College Checking, Savings and Money Market accounts with their
//!   monthly fee and interest rules
//! - An ordered account ledger with open/close, deposit/withdraw and reports
//! - A transaction manager that applies the account-opening policy and loads batches

pub mod account;
pub mod config;
pub mod date;
pub mod error;
pub mod ledger;
pub mod manager;
pub mod profile;

// Re-export commonly used types
pub use account::{Account, AccountKey, AccountKind, AccountType, Campus};
pub use config::{Config, EligibilityRules, LedgerConfig};
pub use date::CalendarDate;
pub use error::{DateError, InvalidDate, LedgerError};
pub use ledger::AccountDatabase;
pub use manager::{LoadReport, TransactionManager};
pub use profile::Profile;
