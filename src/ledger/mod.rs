//! Account ledger: storage, lookup, balance changes, and sorted reports

mod database;
pub mod sort;

pub use database::AccountDatabase;
