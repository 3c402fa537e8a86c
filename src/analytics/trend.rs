//! Period-over-period trend of net salaries.

use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::percent::PercentChange;
use crate::models::{Period, SalaryResult};

/// Whether net salary went up or down from the previous record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Net salary stayed the same or increased.
    Up,
    /// Net salary decreased.
    Down,
}

/// One step of the trend: a record compared with the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The calendar month of the later record.
    pub period: Period,
    /// Identifier of the later record.
    pub calculation_id: Uuid,
    /// Net salary of the later record.
    pub net_salary: Decimal,
    /// Change from the earlier record.
    pub change: PercentChange,
    /// Direction of the change.
    pub direction: Direction,
}

/// Lazy iterator over consecutive record pairs of a snapshot.
///
/// Yields one [`TrendPoint`] for each record after the first. Nothing is
/// cached: each call to [`period_trend`] starts a fresh pass.
#[derive(Debug, Clone)]
pub struct PeriodTrend<'a> {
    records: &'a [SalaryResult],
    next: usize,
}

/// Starts a trend pass over a snapshot ordered oldest to newest.
///
/// # Example
///
/// ```
/// use guard_salary::analytics::period_trend;
///
/// assert_eq!(period_trend(&[]).count(), 0);
/// ```
pub fn period_trend(records: &[SalaryResult]) -> PeriodTrend<'_> {
    PeriodTrend { records, next: 1 }
}

impl Iterator for PeriodTrend<'_> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.records.get(self.next)?;
        let previous = &self.records[self.next - 1];
        self.next += 1;

        let direction = if current.net_salary >= previous.net_salary {
            Direction::Up
        } else {
            Direction::Down
        };

        Some(TrendPoint {
            period: current.period(),
            calculation_id: current.calculation_id,
            net_salary: current.net_salary,
            change: PercentChange::between(previous.net_salary, current.net_salary),
            direction,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeriodTrend<'_> {}

impl FusedIterator for PeriodTrend<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::result_with_net;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn monthly_history(nets: &[&str]) -> Vec<SalaryResult> {
        nets.iter()
            .enumerate()
            .map(|(i, net)| result_with_net(dec(net), 2026, i as u32 + 1))
            .collect()
    }

    #[test]
    fn test_trend_yields_one_point_per_step() {
        let records = monthly_history(&["1000", "1200", "900"]);
        let points: Vec<TrendPoint> = period_trend(&records).collect();

        assert_eq!(points.len(), 2);

        assert_eq!(points[0].period.to_string(), "02.2026");
        assert_eq!(points[0].net_salary, dec("1200"));
        assert_eq!(points[0].change, PercentChange::Value(dec("20")));
        assert_eq!(points[0].direction, Direction::Up);
        assert_eq!(points[0].calculation_id, records[1].calculation_id);

        assert_eq!(points[1].period.to_string(), "03.2026");
        assert_eq!(points[1].change, PercentChange::Value(dec("-25")));
        assert_eq!(points[1].direction, Direction::Down);
    }

    #[test]
    fn test_unchanged_salary_counts_as_up() {
        let records = monthly_history(&["1000", "1000"]);
        let point = period_trend(&records).next().unwrap();

        assert_eq!(point.change, PercentChange::Value(Decimal::ZERO));
        assert_eq!(point.direction, Direction::Up);
    }

    #[test]
    fn test_short_histories_have_no_trend() {
        assert_eq!(period_trend(&[]).count(), 0);
        assert_eq!(period_trend(&monthly_history(&["1000"])).count(), 0);
    }

    #[test]
    fn test_zero_previous_is_undefined_with_direction_from_sign() {
        let records = monthly_history(&["0", "500", "0", "-10"]);
        let points: Vec<TrendPoint> = period_trend(&records).collect();

        assert_eq!(points[0].change, PercentChange::Undefined);
        assert_eq!(points[0].direction, Direction::Up);
        assert_eq!(points[1].change, PercentChange::Value(dec("-100")));
        assert_eq!(points[2].change, PercentChange::Undefined);
        assert_eq!(points[2].direction, Direction::Down);
    }

    #[test]
    fn test_trend_is_restartable_and_sized() {
        let records = monthly_history(&["1000", "1200", "900", "950"]);

        let mut trend = period_trend(&records);
        assert_eq!(trend.len(), 3);
        trend.next();
        assert_eq!(trend.len(), 2);

        let first_pass: Vec<TrendPoint> = period_trend(&records).collect();
        let second_pass: Vec<TrendPoint> = period_trend(&records).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_trend_is_fused() {
        let records = monthly_history(&["1000", "1200"]);
        let mut trend = period_trend(&records);

        assert!(trend.next().is_some());
        assert!(trend.next().is_none());
        assert!(trend.next().is_none());
    }
}
