//! Fail-soft numeric parsing and rounding
//!
//! Stored records keep quantities, rates, and percentages as strings. The
//! rule everywhere is fail-soft: a value that does not parse as a
//! non-negative number computes as zero, so a malformed legacy record can
//! always be rendered instead of rejected.

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a numeric string to a non-negative `Decimal`
///
/// Returns zero for anything that does not parse, and for negative values,
/// which are outside the domain of quantities and rates.
///
/// # Example
///
/// ```
/// use core_kernel::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("12.50"), dec!(12.50));
/// assert_eq!(parse_amount("twelve"), dec!(0));
/// assert_eq!(parse_amount("-3"), dec!(0));
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value.is_sign_positive() || value.is_zero() => value,
        _ => Decimal::ZERO,
    }
}

/// Rounds to the nearest whole number, halves away from zero
///
/// Grand totals are rounded this way to match how invoice totals are
/// conventionally presented (295.0 stays 295, 294.5 becomes 295).
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses an ISO `YYYY-MM-DD` date string, fail-soft
///
/// Returns `None` on malformed input; callers skip such dates when
/// computing ranges or sort them after all dated records.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Current time as epoch milliseconds, the timestamp format of every
/// stored record
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("100"), dec!(100));
        assert_eq!(parse_amount(" 2.5 "), dec!(2.5));
        assert_eq!(parse_amount("0"), dec!(0));
    }

    #[test]
    fn test_parse_amount_malformed_is_zero() {
        assert_eq!(parse_amount(""), dec!(0));
        assert_eq!(parse_amount("abc"), dec!(0));
        assert_eq!(parse_amount("12,5"), dec!(0));
    }

    #[test]
    fn test_parse_amount_negative_is_zero() {
        assert_eq!(parse_amount("-1"), dec!(0));
        assert_eq!(parse_amount("-0.01"), dec!(0));
    }

    #[test]
    fn test_round_whole_half_away_from_zero() {
        assert_eq!(round_whole(dec!(294.5)), dec!(295));
        assert_eq!(round_whole(dec!(294.49)), dec!(294));
        assert_eq!(round_whole(dec!(295.0)), dec!(295));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-04-01"),
            NaiveDate::from_ymd_opt(2024, 4, 1)
        );
        assert_eq!(parse_iso_date("01/04/2024"), None);
        assert_eq!(parse_iso_date(""), None);
    }
}
