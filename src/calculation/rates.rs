//! Fixed rate table for guard salary calculations.
//!
//! All bonus, penalty and tax rates are constants of the engine and are not
//! read from configuration.

use rust_decimal::Decimal;

/// Working days the monthly base salary is spread over to get a daily rate.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Share of the daily rate paid on top for each night shift (20%).
pub const NIGHT_BONUS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Flat amount paid per overtime hour. Not derived from the base salary.
pub const OVERTIME_HOURLY_RATE: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Income tax rate applied to the taxable amount (13%).
pub const INCOME_TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Share of pre-tax pay deducted when violations were recorded (15%).
pub const VIOLATION_PENALTY_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Experience bonus for service strictly longer than
/// [`EXPERIENCE_BONUS_THRESHOLD_YEARS`] (10%).
pub const EXPERIENCE_BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Experience bonus for service strictly longer than
/// [`SENIOR_EXPERIENCE_THRESHOLD_YEARS`] (20%).
pub const SENIOR_EXPERIENCE_BONUS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Years of service that must be exceeded to earn the standard experience bonus.
pub const EXPERIENCE_BONUS_THRESHOLD_YEARS: u32 = 5;

/// Years of service that must be exceeded to earn the senior experience bonus.
pub const SENIOR_EXPERIENCE_THRESHOLD_YEARS: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_values() {
        assert_eq!(WORKING_DAYS_PER_MONTH, dec("22"));
        assert_eq!(NIGHT_BONUS_RATE, dec("0.20"));
        assert_eq!(OVERTIME_HOURLY_RATE, dec("300"));
        assert_eq!(INCOME_TAX_RATE, dec("0.13"));
        assert_eq!(VIOLATION_PENALTY_RATE, dec("0.15"));
        assert_eq!(EXPERIENCE_BONUS_RATE, dec("0.10"));
        assert_eq!(SENIOR_EXPERIENCE_BONUS_RATE, dec("0.20"));
    }

    #[test]
    fn test_senior_tier_is_above_standard_tier() {
        assert!(SENIOR_EXPERIENCE_THRESHOLD_YEARS > EXPERIENCE_BONUS_THRESHOLD_YEARS);
        assert!(SENIOR_EXPERIENCE_BONUS_RATE > EXPERIENCE_BONUS_RATE);
    }
}
