//! Account variants with their fee and interest rules

mod campus;
mod data;
pub mod money;
pub mod rates;

pub use campus::Campus;
pub use data::{Account, AccountKey, AccountKind, AccountType};
pub use money::format_currency;
