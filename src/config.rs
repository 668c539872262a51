//! Ledger and account-opening configuration

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Storage growth policy for the account ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Slots allocated by a fresh ledger
    pub initial_capacity: usize,

    /// Slots added each time the ledger fills up (linear, not doubling)
    pub growth_increment: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            growth_increment: 4,
        }
    }
}

/// Age window for opening accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityRules {
    /// Youngest age allowed to open any account
    pub minimum_age: u32,

    /// Oldest age allowed to open College Checking
    pub college_maximum_age: u32,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            minimum_age: 16,
            college_maximum_age: 24,
        }
    }
}

/// Container for all runtime settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger: LedgerConfig,
    pub eligibility: EligibilityRules,
}

impl Config {
    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Parse settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(json)?)
    }
}
