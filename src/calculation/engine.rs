//! Salary calculation engine.
//!
//! Runs every salary rule in order and assembles the [`SalaryResult`]
//! together with its audit trail. The engine is pure: it never touches the
//! history. Recording the result is the job of
//! [`SalarySession`](crate::session::SalarySession).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::daily_rate::calculate_daily_rate;
use super::experience_bonus::calculate_experience_bonus;
use super::income_tax::calculate_income_tax;
use super::night_bonus::calculate_night_bonus;
use super::overtime_pay::calculate_overtime_pay;
use super::violation_penalty::calculate_violation_penalty;
use crate::models::{AuditStep, SalaryInput, SalaryResult};

/// Calculates a salary, stamping the result with the current time.
///
/// See [`calculate_salary_at`] for the rules applied.
pub fn calculate_salary(input: &SalaryInput) -> SalaryResult {
    calculate_salary_at(input, Utc::now())
}

/// Calculates a salary, stamping the result with the given time.
///
/// The rules are applied in this order:
/// 1. daily rate = base salary / 22
/// 2. night bonus = night shifts x daily rate x 0.20
/// 3. overtime pay = overtime hours x 300
/// 4. experience bonus = 20% over 10 years, 10% over 5 years, else 0
/// 5. penalty = 15% of the total before tax when violations were recorded
/// 6. tax = 13% of the total before tax less the penalty
/// 7. net salary = taxable amount less tax
///
/// No clamping is performed: the net salary is whatever the arithmetic yields.
///
/// # Examples
///
/// ```
/// use guard_salary::calculation::calculate_salary_at;
/// use guard_salary::models::SalaryInput;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SalaryInput::new(Decimal::from(30000), 22, 5, 10, 12, false).unwrap();
/// let timestamp = Utc.with_ymd_and_hms(2026, 1, 31, 18, 0, 0).unwrap();
/// let result = calculate_salary_at(&input, timestamp);
///
/// assert_eq!(result.net_salary.round_dp(2), Decimal::from_str("35116.36").unwrap());
/// assert_eq!(result.audit_trace.len(), 7);
/// ```
pub fn calculate_salary_at(input: &SalaryInput, timestamp: DateTime<Utc>) -> SalaryResult {
    let mut audit_trace: Vec<AuditStep> = Vec::with_capacity(7);
    let mut step_number: u32 = 1;

    let daily = calculate_daily_rate(input.base_salary(), step_number);
    audit_trace.push(daily.audit_step);
    step_number += 1;

    let night = calculate_night_bonus(input.night_shifts(), daily.daily_rate, step_number);
    audit_trace.push(night.audit_step);
    step_number += 1;

    let overtime = calculate_overtime_pay(input.overtime_hours(), step_number);
    audit_trace.push(overtime.audit_step);
    step_number += 1;

    let experience =
        calculate_experience_bonus(input.base_salary(), input.experience_years(), step_number);
    audit_trace.push(experience.audit_step);
    step_number += 1;

    let total_before_tax = input.base_salary()
        + night.night_bonus
        + overtime.overtime_pay
        + experience.experience_bonus;

    let penalty =
        calculate_violation_penalty(total_before_tax, input.has_violations(), step_number);
    audit_trace.push(penalty.audit_step);
    step_number += 1;

    let taxable_amount = total_before_tax - penalty.penalty;

    let tax = calculate_income_tax(taxable_amount, step_number);
    audit_trace.push(tax.audit_step);
    step_number += 1;

    let net_salary = taxable_amount - tax.tax_amount;
    audit_trace.push(net_salary_step(
        total_before_tax,
        penalty.penalty,
        tax.tax_amount,
        net_salary,
        step_number,
    ));

    SalaryResult {
        calculation_id: Uuid::new_v4(),
        timestamp,
        input: input.clone(),
        daily_rate: daily.daily_rate,
        night_bonus: night.night_bonus,
        overtime_pay: overtime.overtime_pay,
        experience_bonus: experience.experience_bonus,
        penalty: penalty.penalty,
        tax_amount: tax.tax_amount,
        net_salary,
        description: SalaryResult::describe(input),
        audit_trace,
    }
}

fn net_salary_step(
    total_before_tax: Decimal,
    penalty: Decimal,
    tax_amount: Decimal,
    net_salary: Decimal,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "total_before_tax": total_before_tax.normalize().to_string(),
            "penalty": penalty.normalize().to_string(),
            "tax_amount": tax_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} - ${} = ${}",
            total_before_tax.round_dp(2).normalize(),
            penalty.round_dp(2).normalize(),
            tax_amount.round_dp(2).normalize(),
            net_salary.round_dp(2).normalize()
        ),
    }
}
