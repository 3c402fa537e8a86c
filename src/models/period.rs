//! Calendar period model.
//!
//! A [`Period`] names a calendar month of a given year. It labels trend
//! entries and selects records when searching the history by month.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month within a year.
///
/// Periods order chronologically (year first, then month) and display in
/// the `MM.yyyy` form.
///
/// # Example
///
/// ```
/// use guard_salary::models::Period;
///
/// let period: Period = "03.2026".parse().unwrap();
/// assert_eq!(period.month(), 3);
/// assert_eq!(period.year(), 2026);
/// assert_eq!(period.to_string(), "03.2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period, rejecting months outside 1..=12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                value: format!("{:02}.{}", month, year),
                message: "month must be between 1 and 12".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the period a timestamp falls in.
    pub fn of(timestamp: &DateTime<Utc>) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the timestamp falls within this period.
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        Period::of(timestamp) == *self
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{}", self.month, self.year)
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (month, year) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| invalid("expected the form MM.yyyy"))?;

        if month.len() != 2 || year.len() != 4 {
            return Err(invalid("expected the form MM.yyyy"));
        }

        let month: u32 = month
            .parse()
            .map_err(|_| invalid("month is not a number"))?;
        let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;

        if !(1..=12).contains(&month) {
            return Err(invalid("month must be between 1 and 12"));
        }

        Ok(Self { year, month })
    }
}
