//! Date-of-birth rules for opening accounts

use crate::account::AccountType;
use crate::config::EligibilityRules;
use crate::date::CalendarDate;
use crate::error::InvalidDate;

/// Check that `dob` is a real past date
pub fn check_calendar_date(dob: &CalendarDate, today: &CalendarDate) -> Result<(), InvalidDate> {
    if !dob.is_valid() {
        return Err(InvalidDate::NotACalendarDate);
    }
    if dob >= today {
        return Err(InvalidDate::NotInThePast);
    }
    Ok(())
}

/// Check that a holder born on `dob` may open an account of `account_type` today
///
/// Holders qualify from their minimum-age birthday onward. College Checking is open
/// through the maximum-age birthday itself and closed from the day after.
pub fn check_dob(
    dob: &CalendarDate,
    account_type: AccountType,
    today: &CalendarDate,
    rules: &EligibilityRules,
) -> Result<(), InvalidDate> {
    check_calendar_date(dob, today)?;

    if *today < dob.plus_years(rules.minimum_age as i32) {
        return Err(InvalidDate::TooYoung(rules.minimum_age));
    }

    if account_type == AccountType::CollegeChecking
        && *today > dob.plus_years(rules.college_maximum_age as i32)
    {
        return Err(InvalidDate::TooOld(rules.college_maximum_age));
    }

    Ok(())
}
