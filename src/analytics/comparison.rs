//! Pairwise comparison of two calculations.
//!
//! A comparison lists how each pay component changed from the first record
//! to the second. Differences smaller than [`MEANINGFUL_DIFFERENCE`] are left
//! out of the line items; the raw net difference and percent are always
//! reported.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryResult;

/// Smallest absolute difference reported as a line item (0.01).
pub const MEANINGFUL_DIFFERENCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A pay component that can differ between two calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonField {
    /// Monthly base salary.
    BaseSalary,
    /// Length-of-service bonus.
    ExperienceBonus,
    /// Night shift bonus.
    NightBonus,
    /// Overtime pay.
    OvertimePay,
    /// Pay after penalty and tax.
    NetSalary,
}

impl ComparisonField {
    /// All compared fields, in report order.
    pub const ALL: [ComparisonField; 5] = [
        ComparisonField::BaseSalary,
        ComparisonField::ExperienceBonus,
        ComparisonField::NightBonus,
        ComparisonField::OvertimePay,
        ComparisonField::NetSalary,
    ];

    /// Reads this field from a result.
    pub fn value_of(&self, result: &SalaryResult) -> Decimal {
        match self {
            ComparisonField::BaseSalary => result.input.base_salary(),
            ComparisonField::ExperienceBonus => result.experience_bonus,
            ComparisonField::NightBonus => result.night_bonus,
            ComparisonField::OvertimePay => result.overtime_pay,
            ComparisonField::NetSalary => result.net_salary,
        }
    }
}

/// A meaningful difference in one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonLine {
    /// The field that changed.
    pub field: ComparisonField,
    /// Value in the first record.
    pub first: Decimal,
    /// Value in the second record.
    pub second: Decimal,
    /// `second - first`.
    pub difference: Decimal,
}

/// The outcome of comparing two calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Identifier of the first record.
    pub first_id: Uuid,
    /// When the first record was calculated.
    pub first_timestamp: DateTime<Utc>,
    /// Identifier of the second record.
    pub second_id: Uuid,
    /// When the second record was calculated.
    pub second_timestamp: DateTime<Utc>,
    /// Fields whose difference is at least [`MEANINGFUL_DIFFERENCE`].
    pub lines: Vec<ComparisonLine>,
    /// Second net salary minus first, unfiltered.
    pub net_difference: Decimal,
    /// `net_difference` as a percent of the first net salary.
    /// Zero when the first net salary is zero.
    pub percent_difference: Decimal,
}

impl ComparisonReport {
    /// Returns the line for a field, if its difference was meaningful.
    pub fn line(&self, field: ComparisonField) -> Option<&ComparisonLine> {
        self.lines.iter().find(|line| line.field == field)
    }

    /// Returns true if any field differs meaningfully.
    pub fn has_changes(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Compares two records that must both be present in `history`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidReference`] for the first record not found
/// in `history` (matched by calculation id).
///
/// # Example
///
/// ```
/// use guard_salary::analytics::{compare, ComparisonField};
/// use guard_salary::calculation::calculate_salary;
/// use guard_salary::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let a = calculate_salary(&SalaryInput::new(Decimal::from(20000), 22, 0, 0, 0, false).unwrap());
/// let b = calculate_salary(&SalaryInput::new(Decimal::from(25000), 22, 0, 0, 0, false).unwrap());
/// let history = vec![a.clone(), b.clone()];
///
/// let report = compare(&history, &a, &b).unwrap();
/// assert_eq!(report.line(ComparisonField::BaseSalary).unwrap().difference, Decimal::from(5000));
/// assert_eq!(report.percent_difference, Decimal::from(25));
/// ```
pub fn compare(
    history: &[SalaryResult],
    first: &SalaryResult,
    second: &SalaryResult,
) -> EngineResult<ComparisonReport> {
    for record in [first, second] {
        ensure_present(history, record.calculation_id)?;
    }

    let lines = ComparisonField::ALL
        .iter()
        .filter_map(|&field| {
            let first_value = field.value_of(first);
            let second_value = field.value_of(second);
            let difference = second_value - first_value;
            (difference.abs() >= MEANINGFUL_DIFFERENCE).then_some(ComparisonLine {
                field,
                first: first_value,
                second: second_value,
                difference,
            })
        })
        .collect();

    let net_difference = second.net_salary - first.net_salary;
    let percent_difference = if first.net_salary.is_zero() {
        Decimal::ZERO
    } else {
        net_difference
            .checked_div(first.net_salary)
            .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    };

    Ok(ComparisonReport {
        first_id: first.calculation_id,
        first_timestamp: first.timestamp,
        second_id: second.calculation_id,
        second_timestamp: second.timestamp,
        lines,
        net_difference,
        percent_difference,
    })
}

fn ensure_present(history: &[SalaryResult], calculation_id: Uuid) -> EngineResult<()> {
    if history.iter().any(|r| r.calculation_id == calculation_id) {
        Ok(())
    } else {
        warn!(calculation_id = %calculation_id, "Comparison references a record outside the history");
        Err(EngineError::InvalidReference { calculation_id })
    }
}
