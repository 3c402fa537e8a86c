//! Salary Engine for Security Guards
//!
//! This crate calculates monthly guard salaries from a base salary and shift
//! parameters, keeps a bounded history of the results, and derives analytics
//! (statistics, period trends, pairwise comparisons) and searches from that
//! history.
//!
//! The usual entry point is [`session::SalarySession`]:
//!
//! ```
//! use guard_salary::models::SalaryInput;
//! use guard_salary::session::SalarySession;
//! use rust_decimal::Decimal;
//!
//! let mut session = SalarySession::default();
//! let input = SalaryInput::new(Decimal::from(30000), 22, 5, 10, 12, false).unwrap();
//! session.calculate(&input);
//!
//! let stats = session.statistics().unwrap();
//! assert_eq!(stats.count, 1);
//! ```

#![warn(missing_docs)]

pub mod analytics;
pub mod calculation;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod search;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::models::{SalaryInput, SalaryResult};

    /// A record with a fixed, bonus-free input and the given net salary,
    /// stamped mid-month in `month`/`year`.
    pub fn result_with_net(net_salary: Decimal, year: i32, month: u32) -> SalaryResult {
        let input = SalaryInput::new(Decimal::from(1000), 22, 0, 0, 0, false).unwrap();
        SalaryResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
            description: SalaryResult::describe(&input),
            input,
            daily_rate: Decimal::ZERO,
            night_bonus: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            experience_bonus: Decimal::ZERO,
            penalty: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            net_salary,
            audit_trace: Vec::new(),
        }
    }
}
