//! Experience bonus calculation functionality.
//!
//! Length of service earns a percentage of the base salary in two tiers.
//! Both thresholds are strict: exactly 5 years earns nothing and exactly
//! 10 years earns only the standard tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::{
    EXPERIENCE_BONUS_RATE, EXPERIENCE_BONUS_THRESHOLD_YEARS, SENIOR_EXPERIENCE_BONUS_RATE,
    SENIOR_EXPERIENCE_THRESHOLD_YEARS,
};
use crate::models::AuditStep;

/// The experience tier a length of service falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// Five years or less: no bonus.
    None,
    /// More than five and up to ten years.
    Standard,
    /// More than ten years.
    Senior,
}

impl ExperienceTier {
    /// Determines the tier for the given years of service.
    ///
    /// # Examples
    ///
    /// ```
    /// use guard_salary::calculation::ExperienceTier;
    ///
    /// assert_eq!(ExperienceTier::for_years(5), ExperienceTier::None);
    /// assert_eq!(ExperienceTier::for_years(6), ExperienceTier::Standard);
    /// assert_eq!(ExperienceTier::for_years(10), ExperienceTier::Standard);
    /// assert_eq!(ExperienceTier::for_years(11), ExperienceTier::Senior);
    /// ```
    pub fn for_years(experience_years: u32) -> Self {
        if experience_years > SENIOR_EXPERIENCE_THRESHOLD_YEARS {
            ExperienceTier::Senior
        } else if experience_years > EXPERIENCE_BONUS_THRESHOLD_YEARS {
            ExperienceTier::Standard
        } else {
            ExperienceTier::None
        }
    }

    /// The share of base salary paid for this tier.
    pub fn rate(&self) -> Decimal {
        match self {
            ExperienceTier::None => Decimal::ZERO,
            ExperienceTier::Standard => EXPERIENCE_BONUS_RATE,
            ExperienceTier::Senior => SENIOR_EXPERIENCE_BONUS_RATE,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ExperienceTier::None => "none",
            ExperienceTier::Standard => "standard",
            ExperienceTier::Senior => "senior",
        }
    }
}

/// The result of calculating the experience bonus.
#[derive(Debug, Clone)]
pub struct ExperienceBonusResult {
    /// The bonus earned for length of service.
    pub experience_bonus: Decimal,
    /// The tier that was applied.
    pub tier: ExperienceTier,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the experience bonus for a base salary and years of service.
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_experience_bonus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_experience_bonus(Decimal::from(30000), 12, 4);
/// assert_eq!(result.experience_bonus, Decimal::from(6000));
/// ```
pub fn calculate_experience_bonus(
    base_salary: Decimal,
    experience_years: u32,
    step_number: u32,
) -> ExperienceBonusResult {
    let tier = ExperienceTier::for_years(experience_years);
    let rate = tier.rate();
    let experience_bonus = base_salary * rate;

    let reasoning = match tier {
        ExperienceTier::None => format!(
            "{} years of service does not exceed {} years - no experience bonus",
            experience_years, EXPERIENCE_BONUS_THRESHOLD_YEARS
        ),
        _ => format!(
            "{} years of service ({} tier): ${} x {} = ${}",
            experience_years,
            tier.as_str(),
            base_salary.normalize(),
            rate.normalize(),
            experience_bonus.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "experience_bonus".to_string(),
        rule_name: "Experience Bonus".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "experience_years": experience_years
        }),
        output: serde_json::json!({
            "tier": tier.as_str(),
            "rate": rate.normalize().to_string(),
            "experience_bonus": experience_bonus.normalize().to_string()
        }),
        reasoning,
    };

    ExperienceBonusResult {
        experience_bonus,
        tier,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_five_years_earns_nothing() {
        let result = calculate_experience_bonus(dec("30000"), 5, 1);
        assert_eq!(result.experience_bonus, Decimal::ZERO);
        assert_eq!(result.tier, ExperienceTier::None);
    }

    #[test]
    fn test_six_years_earns_standard_tier() {
        let result = calculate_experience_bonus(dec("30000"), 6, 1);
        assert_eq!(result.experience_bonus, dec("3000"));
        assert_eq!(result.tier, ExperienceTier::Standard);
    }

    #[test]
    fn test_ten_years_still_standard_tier() {
        let result = calculate_experience_bonus(dec("30000"), 10, 1);
        assert_eq!(result.experience_bonus, dec("3000"));
        assert_eq!(result.tier, ExperienceTier::Standard);
    }

    #[test]
    fn test_eleven_years_earns_senior_tier() {
        let result = calculate_experience_bonus(dec("30000"), 11, 1);
        assert_eq!(result.experience_bonus, dec("6000"));
        assert_eq!(result.tier, ExperienceTier::Senior);
    }

    #[test]
    fn test_no_experience() {
        let result = calculate_experience_bonus(dec("30000"), 0, 1);
        assert_eq!(result.experience_bonus, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("no experience bonus"));
    }

    #[test]
    fn test_audit_step_reports_tier() {
        let result = calculate_experience_bonus(dec("30000"), 12, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "experience_bonus");
        assert_eq!(result.audit_step.output["tier"].as_str().unwrap(), "senior");
        assert_eq!(result.audit_step.output["rate"].as_str().unwrap(), "0.2");
        assert_eq!(
            result.audit_step.reasoning,
            "12 years of service (senior tier): $30000 x 0.2 = $6000"
        );
    }
}
