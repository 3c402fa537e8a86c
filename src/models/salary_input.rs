//! Salary input model.
//!
//! A [`SalaryInput`] holds the shift parameters for one salary calculation.
//! It can only be built through [`SalaryInput::new`] (or deserialized through
//! the same checks), so every value that reaches the calculation engine is
//! already within its accepted range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fewest days that can be worked in a calculation month.
pub const MIN_WORKED_DAYS: u32 = 1;
/// Most days that can be worked in a calculation month.
pub const MAX_WORKED_DAYS: u32 = 31;
/// Most night shifts that can be worked in a calculation month.
pub const MAX_NIGHT_SHIFTS: u32 = 31;
/// Most overtime hours accepted for a calculation month.
pub const MAX_OVERTIME_HOURS: u32 = 200;
/// Largest monthly base salary accepted (one trillion).
///
/// The largest possible gross salary is under 1.5 times this, which keeps
/// every rule and any sum over a history far inside `Decimal` range.
pub const MAX_BASE_SALARY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);
/// Longest length of service accepted, in years.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

/// The validated parameters of a single salary calculation.
///
/// Values are immutable once constructed.
///
/// # Example
///
/// ```
/// use guard_salary::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(30000), 22, 5, 10, 12, false).unwrap();
/// assert_eq!(input.worked_days(), 22);
///
/// assert!(SalaryInput::new(Decimal::from(30000), 0, 5, 10, 12, false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalaryInputFields")]
pub struct SalaryInput {
    base_salary: Decimal,
    worked_days: u32,
    night_shifts: u32,
    overtime_hours: u32,
    experience_years: u32,
    has_violations: bool,
}

/// Unchecked wire form of [`SalaryInput`].
#[derive(Deserialize)]
struct SalaryInputFields {
    base_salary: Decimal,
    worked_days: u32,
    night_shifts: u32,
    overtime_hours: u32,
    experience_years: u32,
    #[serde(default)]
    has_violations: bool,
}

impl TryFrom<SalaryInputFields> for SalaryInput {
    type Error = EngineError;

    fn try_from(fields: SalaryInputFields) -> EngineResult<Self> {
        SalaryInput::new(
            fields.base_salary,
            fields.worked_days,
            fields.night_shifts,
            fields.overtime_hours,
            fields.experience_years,
            fields.has_violations,
        )
    }
}

impl SalaryInput {
    /// Creates a new salary input, rejecting any field outside its range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the first offending field:
    /// - `base_salary` is negative or above [`MAX_BASE_SALARY`]
    /// - `worked_days` is not within 1..=31
    /// - `night_shifts` is not within 0..=31
    /// - `overtime_hours` is not within 0..=200
    /// - `experience_years` is not within 0..=50
    pub fn new(
        base_salary: Decimal,
        worked_days: u32,
        night_shifts: u32,
        overtime_hours: u32,
        experience_years: u32,
        has_violations: bool,
    ) -> EngineResult<Self> {
        if base_salary.is_sign_negative() && !base_salary.is_zero() {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: format!("must be zero or greater, got {}", base_salary),
            });
        }
        if base_salary > MAX_BASE_SALARY {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: format!("must be at most {}, got {}", MAX_BASE_SALARY, base_salary),
            });
        }
        check_range("worked_days", worked_days, MIN_WORKED_DAYS, MAX_WORKED_DAYS)?;
        check_range("night_shifts", night_shifts, 0, MAX_NIGHT_SHIFTS)?;
        check_range("overtime_hours", overtime_hours, 0, MAX_OVERTIME_HOURS)?;
        check_range("experience_years", experience_years, 0, MAX_EXPERIENCE_YEARS)?;

        Ok(Self {
            base_salary,
            worked_days,
            night_shifts,
            overtime_hours,
            experience_years,
            has_violations,
        })
    }

    /// The monthly base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Days worked in the month.
    pub fn worked_days(&self) -> u32 {
        self.worked_days
    }

    /// Night shifts worked in the month.
    pub fn night_shifts(&self) -> u32 {
        self.night_shifts
    }

    /// Overtime hours worked in the month.
    pub fn overtime_hours(&self) -> u32 {
        self.overtime_hours
    }

    /// Completed years of service.
    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Whether any rule violations were recorded for the month.
    pub fn has_violations(&self) -> bool {
        self.has_violations
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> EngineResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be between {} and {}, got {}", min, max, value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn field_of(result: EngineResult<SalaryInput>) -> String {
        match result {
            Err(EngineError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_values_at_range_edges() {
        assert!(SalaryInput::new(dec("0"), 1, 0, 0, 0, false).is_ok());
        assert!(SalaryInput::new(dec("99999.99"), 31, 31, 200, 50, true).is_ok());
    }

    #[test]
    fn test_rejects_negative_base_salary() {
        let result = SalaryInput::new(dec("-0.01"), 22, 0, 0, 0, false);
        assert_eq!(field_of(result), "base_salary");
    }

    #[test]
    fn test_base_salary_upper_bound() {
        assert_eq!(MAX_BASE_SALARY, dec("1000000000000"));
        assert!(SalaryInput::new(MAX_BASE_SALARY, 22, 31, 200, 50, false).is_ok());

        let over = MAX_BASE_SALARY + dec("0.01");
        assert_eq!(field_of(SalaryInput::new(over, 22, 0, 0, 0, false)), "base_salary");
        assert_eq!(
            field_of(SalaryInput::new(Decimal::MAX, 22, 31, 200, 50, false)),
            "base_salary"
        );
    }

    #[test]
    fn test_rejects_zero_worked_days() {
        let result = SalaryInput::new(dec("30000"), 0, 0, 0, 0, false);
        assert_eq!(field_of(result), "worked_days");
    }

    #[test]
    fn test_rejects_out_of_range_counts() {
        assert_eq!(
            field_of(SalaryInput::new(dec("30000"), 32, 0, 0, 0, false)),
            "worked_days"
        );
        assert_eq!(
            field_of(SalaryInput::new(dec("30000"), 22, 32, 0, 0, false)),
            "night_shifts"
        );
        assert_eq!(
            field_of(SalaryInput::new(dec("30000"), 22, 5, 201, 0, false)),
            "overtime_hours"
        );
        assert_eq!(
            field_of(SalaryInput::new(dec("30000"), 22, 5, 10, 51, false)),
            "experience_years"
        );
    }

    #[test]
    fn test_error_message_names_range() {
        let error = SalaryInput::new(dec("30000"), 22, 5, 250, 0, false).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid input field 'overtime_hours': must be between 0 and 200, got 250"
        );
    }

    #[test]
    fn test_deserialize_valid_input() {
        let json = r#"{
            "base_salary": "30000",
            "worked_days": 22,
            "night_shifts": 5,
            "overtime_hours": 10,
            "experience_years": 12
        }"#;

        let input: SalaryInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_salary(), dec("30000"));
        assert_eq!(input.night_shifts(), 5);
        assert!(!input.has_violations());
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let json = r#"{
            "base_salary": "30000",
            "worked_days": 40,
            "night_shifts": 5,
            "overtime_hours": 10,
            "experience_years": 12,
            "has_violations": true
        }"#;

        let error = serde_json::from_str::<SalaryInput>(json).unwrap_err();
        assert!(error.to_string().contains("worked_days"));
    }
}
