//! Overtime pay calculation functionality.

use rust_decimal::Decimal;

use super::rates::OVERTIME_HOURLY_RATE;
use crate::models::AuditStep;

/// The result of calculating overtime pay.
#[derive(Debug, Clone)]
pub struct OvertimePayResult {
    /// The amount paid for overtime hours.
    pub overtime_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pay for overtime hours at the flat [`OVERTIME_HOURLY_RATE`].
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_overtime_pay(10, 3);
/// assert_eq!(result.overtime_pay, Decimal::from(3000));
/// ```
pub fn calculate_overtime_pay(overtime_hours: u32, step_number: u32) -> OvertimePayResult {
    let overtime_pay = Decimal::from(overtime_hours) * OVERTIME_HOURLY_RATE;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours,
            "hourly_rate": OVERTIME_HOURLY_RATE.to_string()
        }),
        output: serde_json::json!({
            "overtime_pay": overtime_pay.to_string()
        }),
        reasoning: format!(
            "{} hours x ${} = ${}",
            overtime_hours, OVERTIME_HOURLY_RATE, overtime_pay
        ),
    };

    OvertimePayResult {
        overtime_pay,
        audit_step,
    }
}
