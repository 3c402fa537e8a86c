//! Salary result models for the guard salary engine.
//!
//! This module contains the [`SalaryResult`] type, which captures every
//! output of a salary calculation, and the [`AuditStep`] records that explain
//! how each amount was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Period, SalaryInput};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use guard_salary::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "overtime_pay".to_string(),
///     rule_name: "Overtime Pay".to_string(),
///     input: serde_json::json!({"overtime_hours": 10}),
///     output: serde_json::json!({"overtime_pay": "3000"}),
///     reasoning: "10 hours x $300 = $3000".to_string(),
/// };
/// assert_eq!(step.rule_id, "overtime_pay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a salary calculation.
///
/// Created once by the calculation engine and never modified afterwards.
/// The history hands out clones, so changing a returned value cannot affect
/// the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The parameters the calculation was run with.
    pub input: SalaryInput,
    /// Base salary divided over the standard working month.
    pub daily_rate: Decimal,
    /// Bonus for night shifts.
    pub night_bonus: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Bonus for length of service.
    pub experience_bonus: Decimal,
    /// Deduction for rule violations.
    pub penalty: Decimal,
    /// Income tax withheld.
    pub tax_amount: Decimal,
    /// Pay after penalty and tax. Not clamped; may be negative.
    pub net_salary: Decimal,
    /// Short human-readable summary of the inputs.
    pub description: String,
    /// Ordered record of every rule applied.
    pub audit_trace: Vec<AuditStep>,
}

impl SalaryResult {
    /// Base salary plus all bonuses, before penalty and tax.
    pub fn gross_salary(&self) -> Decimal {
        self.input.base_salary() + self.night_bonus + self.overtime_pay + self.experience_bonus
    }

    /// Gross salary less the violation penalty.
    pub fn taxable_amount(&self) -> Decimal {
        self.gross_salary() - self.penalty
    }

    /// The calendar month the calculation was made in.
    pub fn period(&self) -> Period {
        Period::of(&self.timestamp)
    }

    /// Builds the short summary stored in [`SalaryResult::description`].
    pub fn describe(input: &SalaryInput) -> String {
        format!(
            "Base salary: {}, days: {}, night shifts: {}",
            input.base_salary().normalize(),
            input.worked_days(),
            input.night_shifts()
        )
    }
}
