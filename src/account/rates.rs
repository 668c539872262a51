//! Monthly fee and interest rules by account variant
//!
//! Interest is quoted as an annual rate and credited monthly (rate / 12).
//!
//! | Variant          | Annual rate              | Monthly fee                                 |
//! |------------------|--------------------------|---------------------------------------------|
//! | Checking         | 1%                       | $12, waived at $1,000                       |
//! | College Checking | 1%                       | none                                        |
//! | Savings          | 4% (4.25% loyal)         | $25, waived at $500                         |
//! | Money Market     | 4.5% (4.75% loyal)       | $25 below $2,000, plus $10 past 3 withdrawals |

use super::AccountKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const CHECKING_RATE: Decimal = dec!(0.01);
pub const CHECKING_FEE: Decimal = dec!(12);
pub const CHECKING_FEE_WAIVER: Decimal = dec!(1000);

pub const SAVINGS_RATE: Decimal = dec!(0.04);
pub const SAVINGS_LOYAL_RATE: Decimal = dec!(0.0425);
pub const SAVINGS_FEE: Decimal = dec!(25);
pub const SAVINGS_FEE_WAIVER: Decimal = dec!(500);

pub const MONEY_MARKET_RATE: Decimal = dec!(0.045);
pub const MONEY_MARKET_LOYAL_RATE: Decimal = dec!(0.0475);
pub const MONEY_MARKET_FEE: Decimal = dec!(25);
pub const MONEY_MARKET_FEE_WAIVER: Decimal = dec!(2000);
pub const MONEY_MARKET_WITHDRAWAL_FEE: Decimal = dec!(10);

/// Withdrawals allowed per statement period before the surcharge applies
pub const FREE_WITHDRAWALS: u32 = 3;

/// Balance at which a Money Market holder is loyal
pub const MONEY_MARKET_LOYALTY_BALANCE: Decimal = dec!(2000);

impl AccountKind {
    /// Annual interest rate for this variant and its current loyalty status
    pub fn annual_rate(&self) -> Decimal {
        match self {
            AccountKind::Checking | AccountKind::CollegeChecking { .. } => CHECKING_RATE,
            AccountKind::Savings { loyal: true } => SAVINGS_LOYAL_RATE,
            AccountKind::Savings { loyal: false } => SAVINGS_RATE,
            AccountKind::MoneyMarket { loyal: true, .. } => MONEY_MARKET_LOYAL_RATE,
            AccountKind::MoneyMarket { loyal: false, .. } => MONEY_MARKET_RATE,
        }
    }

    /// Interest earned this month on `balance`
    pub fn monthly_interest_on(&self, balance: Decimal) -> Decimal {
        self.annual_rate() * balance / MONTHS_PER_YEAR
    }

    /// Fee due this month given `balance`
    pub fn monthly_fee_on(&self, balance: Decimal) -> Decimal {
        match self {
            AccountKind::Checking if balance >= CHECKING_FEE_WAIVER => Decimal::ZERO,
            AccountKind::Checking => CHECKING_FEE,
            AccountKind::CollegeChecking { .. } => Decimal::ZERO,
            AccountKind::Savings { .. } if balance >= SAVINGS_FEE_WAIVER => Decimal::ZERO,
            AccountKind::Savings { .. } => SAVINGS_FEE,
            AccountKind::MoneyMarket { withdrawals, .. } => {
                let surcharge = if *withdrawals > FREE_WITHDRAWALS {
                    MONEY_MARKET_WITHDRAWAL_FEE
                } else {
                    Decimal::ZERO
                };
                if balance >= MONEY_MARKET_FEE_WAIVER {
                    surcharge
                } else {
                    MONEY_MARKET_FEE + surcharge
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Campus;

    #[test]
    fn test_checking_fee_tiers() {
        let kind = AccountKind::Checking;
        assert_eq!(kind.monthly_fee_on(dec!(500)), dec!(12));
        assert_eq!(kind.monthly_fee_on(dec!(999.99)), dec!(12));
        assert_eq!(kind.monthly_fee_on(dec!(1000)), dec!(0));
    }

    #[test]
    fn test_college_checking_never_charged() {
        let kind = AccountKind::CollegeChecking { campus: Campus::Camden };
        assert_eq!(kind.monthly_fee_on(dec!(0)), dec!(0));
        assert_eq!(kind.annual_rate(), CHECKING_RATE);
    }

    #[test]
    fn test_savings_rates() {
        assert_eq!(AccountKind::Savings { loyal: true }.annual_rate(), dec!(0.0425));
        assert_eq!(AccountKind::Savings { loyal: false }.annual_rate(), dec!(0.04));
        assert_eq!(AccountKind::Savings { loyal: false }.monthly_fee_on(dec!(499)), dec!(25));
        assert_eq!(AccountKind::Savings { loyal: false }.monthly_fee_on(dec!(500)), dec!(0));
    }

    #[test]
    fn test_money_market_fee_tiers() {
        let busy = AccountKind::MoneyMarket { loyal: false, withdrawals: 4 };
        assert_eq!(busy.monthly_fee_on(dec!(1800.0)), dec!(35));
        assert_eq!(busy.monthly_fee_on(dec!(2500.0)), dec!(10));

        let quiet = AccountKind::MoneyMarket { loyal: true, withdrawals: 3 };
        assert_eq!(quiet.monthly_fee_on(dec!(1800)), dec!(25));
        assert_eq!(quiet.monthly_fee_on(dec!(2000)), dec!(0));
    }

    #[test]
    fn test_monthly_interest() {
        let kind = AccountKind::Savings { loyal: false };
        assert_eq!(kind.monthly_interest_on(dec!(1200)), dec!(4));

        let kind = AccountKind::MoneyMarket { loyal: true, withdrawals: 0 };
        assert_eq!(kind.monthly_interest_on(dec!(2400)), dec!(9.5));
    }
}
