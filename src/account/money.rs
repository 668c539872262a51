//! Currency display

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals and thousands separators, e.g. `1,234.57`
///
/// Halves round away from zero. Negative balances keep a leading minus sign.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "0.00");
        assert_eq!(format_currency(dec!(488)), "488.00");
        assert_eq!(format_currency(dec!(1234.5)), "1,234.50");
        assert_eq!(format_currency(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_currency(dec!(0.416666)), "0.42");
        assert_eq!(format_currency(dec!(2.005)), "2.01");
        assert_eq!(format_currency(dec!(-7)), "-7.00");
        assert_eq!(format_currency(dec!(-0.001)), "0.00");
    }
}
