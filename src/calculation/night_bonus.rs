//! Night shift bonus calculation functionality.
//!
//! Each night shift earns a fixed share of the daily rate on top of the
//! base salary.

use rust_decimal::Decimal;

use super::rates::NIGHT_BONUS_RATE;
use crate::models::AuditStep;

/// The result of calculating the night shift bonus.
#[derive(Debug, Clone)]
pub struct NightBonusResult {
    /// The bonus earned for night shifts.
    pub night_bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the bonus for night shifts.
///
/// `night_bonus = night_shifts x daily_rate x NIGHT_BONUS_RATE`
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_night_bonus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_night_bonus(4, Decimal::from(1000), 2);
/// assert_eq!(result.night_bonus, Decimal::from(800));
/// ```
pub fn calculate_night_bonus(
    night_shifts: u32,
    daily_rate: Decimal,
    step_number: u32,
) -> NightBonusResult {
    let night_bonus = Decimal::from(night_shifts) * daily_rate * NIGHT_BONUS_RATE;

    let reasoning = if night_shifts == 0 {
        "No night shifts worked - no night bonus".to_string()
    } else {
        format!(
            "{} night shifts x ${} x {} = ${}",
            night_shifts,
            daily_rate.round_dp(2).normalize(),
            NIGHT_BONUS_RATE.normalize(),
            night_bonus.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_bonus".to_string(),
        rule_name: "Night Shift Bonus".to_string(),
        input: serde_json::json!({
            "night_shifts": night_shifts,
            "daily_rate": daily_rate.normalize().to_string(),
            "rate": NIGHT_BONUS_RATE.normalize().to_string()
        }),
        output: serde_json::json!({
            "night_bonus": night_bonus.normalize().to_string()
        }),
        reasoning,
    };

    NightBonusResult {
        night_bonus,
        audit_step,
    }
}
