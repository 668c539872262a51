//! Account holder identity

use crate::date::CalendarDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The person an account belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Holder's first name, as entered
    first_name: String,

    /// Holder's last name, as entered
    last_name: String,

    /// Date of birth
    dob: CalendarDate,
}

impl Profile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, dob: CalendarDate) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn dob(&self) -> &CalendarDate {
        &self.dob
    }

    /// Report ordering: last name, then first name, then date of birth
    pub fn compare(&self, other: &Profile) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.dob.cmp(&other.dob))
    }
}

/// Capitalize `head`'s first character and append the lowercased remainder of `tail_from`
///
/// Identity matching normalizes the other holder's names with our own remainder, so in
/// practice only the leading characters of the two names are compared.
fn normalize_name(head: &str, tail_from: &str) -> String {
    let first: String = head.chars().take(1).flat_map(char::to_uppercase).collect();
    let rest: String = tail_from.chars().skip(1).flat_map(char::to_lowercase).collect();
    first + &rest
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        let ours_first = normalize_name(&self.first_name, &self.first_name);
        let ours_last = normalize_name(&self.last_name, &self.last_name);
        let theirs_first = normalize_name(&other.first_name, &self.first_name);
        let theirs_last = normalize_name(&other.last_name, &self.last_name);

        ours_first == theirs_first && ours_last == theirs_last && self.dob == other.dob
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first_name, self.last_name, self.dob)
    }
}
