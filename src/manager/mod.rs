//! Teller operations: eligibility policy, messages, and batch loading

pub mod eligibility;
pub mod loader;
mod transaction;

pub use loader::LoadReport;
pub use transaction::{parse_amount, TransactionManager};
