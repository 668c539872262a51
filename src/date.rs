//! Calendar dates in month/day/year form
//!
//! Dates are parsed without validation; `is_valid` is checked separately so that
//! callers can report "not a calendar date" distinctly from "could not parse".

use crate::error::DateError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAYS_IN_FEB_LEAP_YEAR: i32 = 29;
const DAYS_IN_FEB: i32 = 28;

/// A (month, day, year) triple ordered chronologically
///
/// Field order matters: the derived ordering compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    /// Create a date without checking it against the calendar
    pub fn new(month: i32, day: i32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Today's date in the local time zone
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.month() as i32, now.day() as i32, now.year())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// Divisible by 4, and either not by 100 or also by 400
    pub fn is_leap_year(&self) -> bool {
        self.year % 4 == 0 && (self.year % 100 != 0 || self.year % 400 == 0)
    }

    /// Number of days in this date's month, or `None` for a month outside 1..=12
    pub fn days_in_month(&self) -> Option<i32> {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
            4 | 6 | 9 | 11 => Some(30),
            2 if self.is_leap_year() => Some(DAYS_IN_FEB_LEAP_YEAR),
            2 => Some(DAYS_IN_FEB),
            _ => None,
        }
    }

    /// Whether the date exists on the Gregorian calendar
    pub fn is_valid(&self) -> bool {
        match self.days_in_month() {
            Some(max_day) => self.day >= 1 && self.day <= max_day,
            None => false,
        }
    }

    /// The same month and day `years` later, e.g. a birthday anniversary
    pub fn plus_years(&self, years: i32) -> Self {
        Self::new(self.month, self.day, self.year + years)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parse `month/day/year`, or `now` for today's date
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("now") {
            return Ok(Self::today());
        }

        let tokens: Vec<&str> = input.split('/').map(str::trim).collect();
        if tokens.len() != 3 {
            return Err(DateError::WrongShape(input.to_string()));
        }

        let parse = |token: &str| {
            token.parse::<i32>().map_err(|_| DateError::NotANumber {
                input: input.to_string(),
                token: token.to_string(),
            })
        };

        Ok(Self::new(parse(tokens[0])?, parse(tokens[1])?, parse(tokens[2])?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_february() {
        assert!(!date("2/29/2011").is_valid());
        assert!(date("2/28/2011").is_valid());
        assert!(!date("2/30/2000").is_valid());
        assert!(date("2/29/2000").is_valid());
        assert!(!date("2/29/1900").is_valid());
        assert!(date("2/29/2024").is_valid());
    }

    #[test]
    fn test_month_lengths() {
        assert!(!date("3/32/2011").is_valid());
        assert!(date("3/31/2011").is_valid());
        assert!(!date("6/31/2011").is_valid());
        assert!(date("6/30/2011").is_valid());
    }

    #[test]
    fn test_out_of_range_fields() {
        assert!(!date("4/0/2011").is_valid());
        assert!(!date("4/-3/2011").is_valid());
        assert!(!date("13/26/2011").is_valid());
        assert!(!date("0/26/2011").is_valid());
    }

    #[test]
    fn test_ordering() {
        assert!(date("12/31/1999") < date("1/1/2000"));
        assert!(date("1/2/2000") > date("1/1/2000"));
        assert!(date("2/1/2000") > date("1/31/2000"));
        assert_eq!(date("1/1/2000"), CalendarDate::new(1, 1, 2000));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1/1".parse::<CalendarDate>(),
            Err(DateError::WrongShape("1/1".to_string()))
        );
        assert!(matches!(
            "1/x/2000".parse::<CalendarDate>(),
            Err(DateError::NotANumber { .. })
        ));
        assert_eq!("now".parse::<CalendarDate>().unwrap(), CalendarDate::today());
    }

    #[test]
    fn test_display() {
        assert_eq!(date("01/05/1990").to_string(), "1/5/1990");
    }

    #[test]
    fn test_plus_years() {
        let dob = date("10/17/2010");
        assert_eq!(dob.plus_years(16), date("10/17/2026"));
        assert!(dob.plus_years(16) > date("10/16/2026"));
    }
}
