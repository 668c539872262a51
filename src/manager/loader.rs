//! Load account batches from comma-separated lines
//!
//! Each line is `TYPE,first,last,M/D/YYYY,balance[,code]` where TYPE is `C`, `CC`, `S`
//! or `MM`. Savings and Money Market lines end in a loyalty code (0 or 1); College
//! Checking lines may end in a campus code (0, 1, 2; New Brunswick when omitted).
//! Blank lines are ignored. A bad line is reported and skipped; the rest of the batch
//! still loads.

use super::{parse_amount, TransactionManager};
use crate::account::{Account, AccountType, Campus};
use crate::date::CalendarDate;
use crate::error::LedgerError;
use crate::profile::Profile;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Outcome of loading one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Accounts opened from the batch
    pub loaded: usize,

    /// One message per skipped line, prefixed with its line number
    pub rejected: Vec<String>,

    /// The ledger held no accounts once the batch was done
    pub ledger_empty: bool,
}

impl LoadReport {
    /// Rejection messages followed by the closing "Accounts loaded." line
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for message in &self.rejected {
            out.push_str(message);
            out.push('\n');
        }
        out.push_str("Accounts loaded.\n");
        if self.ledger_empty {
            out.push_str("Account Database is empty.\n");
        }
        out
    }
}

fn malformed(message: impl Into<String>) -> LedgerError {
    LedgerError::MalformedInput(message.into())
}

fn parse_loyalty(code: &str) -> Result<bool, LedgerError> {
    match code.parse::<i64>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        _ => Err(malformed("Invalid loyal customer status code.")),
    }
}

fn parse_campus(code: &str) -> Result<Campus, LedgerError> {
    code.parse::<u8>()
        .ok()
        .and_then(Campus::from_code)
        .ok_or_else(|| malformed("Invalid campus code."))
}

/// Convert one batch record into an account (not yet checked for eligibility)
pub fn parse_record(record: &StringRecord) -> Result<Account, LedgerError> {
    let code = record.get(0).unwrap_or_default();
    let account_type = AccountType::from_initial(code).ok_or_else(|| malformed("Invalid account type."))?;

    let field_count_ok = match account_type {
        AccountType::Checking => record.len() == 5,
        AccountType::CollegeChecking => record.len() == 5 || record.len() == 6,
        AccountType::Savings | AccountType::MoneyMarket => record.len() == 6,
    };
    if !field_count_ok {
        return Err(malformed("Missing data for loading an account."));
    }

    let dob = CalendarDate::from_str(&record[3])?;
    let holder = Profile::new(&record[1], &record[2], dob);
    let balance = parse_amount(&record[4])?;
    if balance.is_sign_negative() {
        return Err(malformed("Not a valid amount."));
    }

    let account = match account_type {
        AccountType::Checking => Account::checking(holder, balance),
        AccountType::CollegeChecking => {
            let campus = match record.get(5) {
                Some(code) => parse_campus(code)?,
                None => Campus::default(),
            };
            Account::college_checking(holder, balance, campus)
        }
        AccountType::Savings => Account::savings(holder, balance, parse_loyalty(&record[5])?),
        AccountType::MoneyMarket => Account::money_market(holder, balance, parse_loyalty(&record[5])?),
    };
    Ok(account)
}

impl TransactionManager {
    /// Open every eligible account in a batch read from `reader`
    pub fn load_accounts<R: Read>(&mut self, reader: R) -> LoadReport {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut report = LoadReport::default();
        for result in csv_reader.records() {
            let outcome = match result {
                Ok(record) if record.iter().all(str::is_empty) => continue,
                Ok(record) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    parse_record(&record)
                        .and_then(|account| self.open_account(account))
                        .map_err(|err| (line, err.to_string()))
                }
                Err(err) => {
                    let line = err.position().map(|p| p.line()).unwrap_or_default();
                    Err((line, err.to_string()))
                }
            };

            match outcome {
                Ok(_) => report.loaded += 1,
                Err((line, message)) => {
                    warn!("batch line {} skipped: {}", line, message);
                    report.rejected.push(format!("line {}: {}", line, message));
                }
            }
        }

        report.ledger_empty = self.database().is_empty();
        info!("loaded {} accounts, skipped {} lines", report.loaded, report.rejected.len());
        report
    }

    /// Load a batch file from disk
    pub fn load_accounts_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport, Box<dyn Error>> {
        let file = File::open(path)?;
        Ok(self.load_accounts(file))
    }
}
