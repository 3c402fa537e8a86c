//! Violation penalty calculation functionality.
//!
//! When rule violations were recorded, a share of the pre-tax pay is
//! deducted before tax is applied.

use rust_decimal::Decimal;

use super::rates::VIOLATION_PENALTY_RATE;
use crate::models::AuditStep;

/// The result of applying the violation penalty.
#[derive(Debug, Clone)]
pub struct ViolationPenaltyResult {
    /// The amount deducted. Exactly zero when there were no violations.
    pub penalty: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the violation penalty on the total before tax.
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_violation_penalty;
/// use rust_decimal::Decimal;
///
/// let result = calculate_violation_penalty(Decimal::from(40000), true, 5);
/// assert_eq!(result.penalty, Decimal::from(6000));
///
/// let result = calculate_violation_penalty(Decimal::from(40000), false, 5);
/// assert_eq!(result.penalty, Decimal::ZERO);
/// ```
pub fn calculate_violation_penalty(
    total_before_tax: Decimal,
    has_violations: bool,
    step_number: u32,
) -> ViolationPenaltyResult {
    let (penalty, reasoning) = if has_violations {
        let penalty = total_before_tax * VIOLATION_PENALTY_RATE;
        let reasoning = format!(
            "Violations recorded: ${} x {} = ${}",
            total_before_tax.round_dp(2).normalize(),
            VIOLATION_PENALTY_RATE.normalize(),
            penalty.round_dp(2).normalize()
        );
        (penalty, reasoning)
    } else {
        (
            Decimal::ZERO,
            "No violations recorded - no penalty applied".to_string(),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "violation_penalty".to_string(),
        rule_name: "Violation Penalty".to_string(),
        input: serde_json::json!({
            "total_before_tax": total_before_tax.normalize().to_string(),
            "has_violations": has_violations
        }),
        output: serde_json::json!({
            "penalty": penalty.normalize().to_string(),
            "penalty_applied": has_violations
        }),
        reasoning,
    };

    ViolationPenaltyResult {
        penalty,
        audit_step,
    }
}
