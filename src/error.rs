//! Error types for ledger operations, date parsing, and batch loading

use thiserror::Error;

/// Failure to turn a `month/day/year` token into a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected month/day/year, got '{0}'")]
    WrongShape(String),

    #[error("'{token}' is not a number in date '{input}'")]
    NotANumber { input: String, token: String },
}

/// Recoverable ledger and account-opening failures
///
/// The `Display` strings double as the messages shown to the person at the counter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{0} is not in the database.")]
    NotFound(String),

    #[error("{0} Withdraw - insufficient fund.")]
    InsufficientFunds(String),

    #[error("{0} is already in the database.")]
    DuplicateAccount(String),

    #[error("DOB invalid: {0}")]
    InvalidDate(InvalidDate),

    #[error("{0}")]
    MalformedInput(String),
}

/// Why a date of birth was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("is not a valid calendar date.")]
    NotACalendarDate,

    #[error("cannot be today or a future date.")]
    NotInThePast,

    #[error("user under {0}.")]
    TooYoung(u32),

    #[error("user over {0}.")]
    TooOld(u32),
}

impl From<InvalidDate> for LedgerError {
    fn from(reason: InvalidDate) -> Self {
        LedgerError::InvalidDate(reason)
    }
}

impl From<DateError> for LedgerError {
    fn from(err: DateError) -> Self {
        LedgerError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LedgerError::NotFound("John Doe 2/19/1990(C)".to_string());
        assert_eq!(err.to_string(), "John Doe 2/19/1990(C) is not in the database.");

        let err: LedgerError = InvalidDate::TooYoung(16).into();
        assert_eq!(err.to_string(), "DOB invalid: user under 16.");

        let err = LedgerError::InsufficientFunds("Jane Doe 1/1/2000(MM)".to_string());
        assert_eq!(err.to_string(), "Jane Doe 1/1/2000(MM) Withdraw - insufficient fund.");
    }
}
