//! Calculation logic for the guard salary engine.
//!
//! This module contains the fixed rate table and one function per salary
//! rule: daily rate derivation, night shift bonus, overtime pay, the tiered
//! experience bonus, the violation penalty and income tax. The
//! [`calculate_salary`] engine runs them in order and records an audit step
//! for each.

mod daily_rate;
mod engine;
mod experience_bonus;
mod income_tax;
mod night_bonus;
mod overtime_pay;
pub mod rates;
mod violation_penalty;

pub use daily_rate::{DailyRateResult, calculate_daily_rate};
pub use engine::{calculate_salary, calculate_salary_at};
pub use experience_bonus::{ExperienceBonusResult, ExperienceTier, calculate_experience_bonus};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use night_bonus::{NightBonusResult, calculate_night_bonus};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay};
pub use violation_penalty::{ViolationPenaltyResult, calculate_violation_penalty};
