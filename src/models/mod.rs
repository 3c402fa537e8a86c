//! Core data models for the guard salary engine.
//!
//! This module contains the domain models used throughout the engine: the
//! validated calculation input, the computed result with its audit trail,
//! and the calendar period used for trend labels and month searches.

mod period;
mod salary_input;
mod salary_result;

pub use period::Period;
pub use salary_input::{
    MAX_BASE_SALARY, MAX_EXPERIENCE_YEARS, MAX_NIGHT_SHIFTS, MAX_OVERTIME_HOURS, MAX_WORKED_DAYS,
    MIN_WORKED_DAYS, SalaryInput,
};
pub use salary_result::{AuditStep, SalaryResult};
