//! Percent change between two net salaries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The relative change from one net salary to the next, in percent.
///
/// A change measured from a previous value of exactly zero has no meaningful
/// ratio and is reported as [`PercentChange::Undefined`] instead of an
/// infinite or NaN value.
///
/// # Example
///
/// ```
/// use guard_salary::analytics::PercentChange;
/// use rust_decimal::Decimal;
///
/// let change = PercentChange::between(Decimal::from(1200), Decimal::from(900));
/// assert_eq!(change, PercentChange::Value(Decimal::from(-25)));
///
/// let change = PercentChange::between(Decimal::ZERO, Decimal::from(900));
/// assert_eq!(change, PercentChange::Undefined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum PercentChange {
    /// A defined change, in percent of the previous value.
    Value(Decimal),
    /// The previous value was zero.
    Undefined,
}

impl PercentChange {
    /// Computes `(current - previous) / previous * 100`.
    pub fn between(previous: Decimal, current: Decimal) -> Self {
        if previous.is_zero() {
            return PercentChange::Undefined;
        }
        (current - previous)
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
            .map_or(PercentChange::Undefined, PercentChange::Value)
    }

    /// Returns the percentage, or `None` if undefined.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            PercentChange::Value(percent) => Some(*percent),
            PercentChange::Undefined => None,
        }
    }

    /// Returns true if no ratio could be computed.
    pub fn is_undefined(&self) -> bool {
        matches!(self, PercentChange::Undefined)
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Value(percent) => write!(f, "{}%", percent.round_dp(1).normalize()),
            PercentChange::Undefined => write!(f, "undefined"),
        }
    }
}
