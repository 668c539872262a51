//! Rutgers campuses eligible for College Checking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Campus attached to a College Checking account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Campus {
    #[default]
    NewBrunswick,
    Newark,
    Camden,
}

impl Campus {
    /// Campus from its numeric code (0, 1, 2)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Campus::NewBrunswick),
            1 => Some(Campus::Newark),
            2 => Some(Campus::Camden),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Campus::NewBrunswick => 0,
            Campus::Newark => 1,
            Campus::Camden => 2,
        }
    }

    /// Name as printed in account listings
    pub fn as_str(&self) -> &'static str {
        match self {
            Campus::NewBrunswick => "NEW_BRUNSWICK",
            Campus::Newark => "NEWARK",
            Campus::Camden => "CAMDEN",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
