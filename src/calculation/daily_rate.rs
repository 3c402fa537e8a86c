//! Daily rate calculation functionality.
//!
//! The daily rate spreads the monthly base salary over a standard working
//! month and is the basis of the night shift bonus.

use rust_decimal::Decimal;

use super::rates::WORKING_DAYS_PER_MONTH;
use crate::models::AuditStep;

/// The result of deriving the daily rate, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct DailyRateResult {
    /// Base salary per standard working day.
    pub daily_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the daily rate from a monthly base salary.
///
/// The divisor is always [`WORKING_DAYS_PER_MONTH`], regardless of how many
/// days were actually worked.
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_daily_rate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_daily_rate(Decimal::from(22000), 1);
/// assert_eq!(result.daily_rate, Decimal::from(1000));
/// ```
pub fn calculate_daily_rate(base_salary: Decimal, step_number: u32) -> DailyRateResult {
    let daily_rate = base_salary / WORKING_DAYS_PER_MONTH;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "working_days": WORKING_DAYS_PER_MONTH.to_string()
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} days = ${}",
            base_salary.normalize(),
            WORKING_DAYS_PER_MONTH,
            daily_rate.round_dp(2).normalize()
        ),
    };

    DailyRateResult {
        daily_rate,
        audit_step,
    }
}
