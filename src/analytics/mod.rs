//! Analytics over a snapshot of the calculation history.
//!
//! All functions here take a slice of records ordered oldest to newest
//! (as returned by [`HistoryStore::snapshot`](crate::history::HistoryStore::snapshot))
//! and never modify it. An empty slice yields "no data" (`None`) rather
//! than an error.

mod comparison;
mod percent;
mod statistics;
mod trend;

pub use comparison::{
    ComparisonField, ComparisonLine, ComparisonReport, MEANINGFUL_DIFFERENCE, compare,
};
pub use percent::PercentChange;
pub use statistics::{
    HistoryStatistics, average, last_change_percent, max_entry, min_entry, summarize,
};
pub use trend::{Direction, PeriodTrend, TrendPoint, period_trend};
