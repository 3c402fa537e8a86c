//! Aggregate statistics over the calculation history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::percent::PercentChange;
use crate::models::SalaryResult;

/// Summary statistics for a history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    /// Number of records summarized.
    pub count: usize,
    /// Mean net salary.
    pub average_net_salary: Decimal,
    /// Record with the highest net salary (earliest on ties).
    pub max_entry: SalaryResult,
    /// Position of `max_entry` in the snapshot.
    pub max_index: usize,
    /// Record with the lowest net salary (earliest on ties).
    pub min_entry: SalaryResult,
    /// Position of `min_entry` in the snapshot.
    pub min_index: usize,
    /// Change from the second-to-last to the last record.
    /// `None` with fewer than two records.
    pub last_change: Option<PercentChange>,
}

/// Mean net salary of the records, or `None` if there are none.
///
/// Records imported from JSON carry unchecked amounts, so a total that
/// would overflow falls back to summing each record's share of the mean.
///
/// # Example
///
/// ```
/// use guard_salary::analytics::average;
///
/// assert_eq!(average(&[]), None);
/// ```
pub fn average(records: &[SalaryResult]) -> Option<Decimal> {
    if records.is_empty() {
        return None;
    }
    let count = Decimal::from(records.len());
    let total = records
        .iter()
        .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.net_salary));

    Some(match total {
        Some(total) => total / count,
        None => records
            .iter()
            .fold(Decimal::ZERO, |mean, r| mean.saturating_add(r.net_salary / count)),
    })
}

/// The record with the highest net salary and its position.
///
/// When several records share the highest value the earliest one wins.
pub fn max_entry(records: &[SalaryResult]) -> Option<(usize, &SalaryResult)> {
    first_extreme(records, |candidate, best| candidate > best)
}

/// The record with the lowest net salary and its position.
///
/// When several records share the lowest value the earliest one wins.
pub fn min_entry(records: &[SalaryResult]) -> Option<(usize, &SalaryResult)> {
    first_extreme(records, |candidate, best| candidate < best)
}

// Replaces the current best only on a strict improvement, so ties keep the
// earliest record.
fn first_extreme<F>(records: &[SalaryResult], better: F) -> Option<(usize, &SalaryResult)>
where
    F: Fn(Decimal, Decimal) -> bool,
{
    let mut iter = records.iter().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        if better(candidate.1.net_salary, best.1.net_salary) {
            candidate
        } else {
            best
        }
    }))
}

/// Percent change between the last two records.
///
/// Returns `None` when fewer than two records exist.
pub fn last_change_percent(records: &[SalaryResult]) -> Option<PercentChange> {
    match records {
        [.., previous, last] => Some(PercentChange::between(
            previous.net_salary,
            last.net_salary,
        )),
        _ => None,
    }
}

/// Computes all statistics at once, or `None` for an empty snapshot.
pub fn summarize(records: &[SalaryResult]) -> Option<HistoryStatistics> {
    let average_net_salary = average(records)?;
    let (max_index, max) = max_entry(records)?;
    let (min_index, min) = min_entry(records)?;

    Some(HistoryStatistics {
        count: records.len(),
        average_net_salary,
        max_entry: max.clone(),
        max_index,
        min_entry: min.clone(),
        min_index,
        last_change: last_change_percent(records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::result_with_net;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn history(nets: &[&str]) -> Vec<SalaryResult> {
        nets.iter()
            .enumerate()
            .map(|(i, net)| result_with_net(dec(net), 2026, (i as u32 % 12) + 1))
            .collect()
    }

    #[test]
    fn test_three_record_reference_history() {
        let records = history(&["1000", "1200", "900"]);

        let avg = average(&records).unwrap();
        assert!((avg - dec("1033.33")).abs() <= dec("0.01"));

        let (max_index, max) = max_entry(&records).unwrap();
        assert_eq!(max_index, 1);
        assert_eq!(max.net_salary, dec("1200"));

        let (min_index, min) = min_entry(&records).unwrap();
        assert_eq!(min_index, 2);
        assert_eq!(min.net_salary, dec("900"));

        assert_eq!(
            last_change_percent(&records),
            Some(PercentChange::Value(dec("-25")))
        );
    }

    #[test]
    fn test_empty_history_has_no_data() {
        assert_eq!(average(&[]), None);
        assert!(max_entry(&[]).is_none());
        assert!(min_entry(&[]).is_none());
        assert_eq!(last_change_percent(&[]), None);
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_single_record() {
        let records = history(&["1500"]);

        assert_eq!(average(&records), Some(dec("1500")));
        assert_eq!(max_entry(&records).unwrap().0, 0);
        assert_eq!(min_entry(&records).unwrap().0, 0);
        assert_eq!(last_change_percent(&records), None);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let records = history(&["1000", "1200", "1200", "900", "900"]);

        assert_eq!(max_entry(&records).unwrap().0, 1);
        assert_eq!(min_entry(&records).unwrap().0, 3);
    }

    #[test]
    fn test_all_equal_picks_first_for_both() {
        let records = history(&["700", "700", "700"]);

        assert_eq!(max_entry(&records).unwrap().0, 0);
        assert_eq!(min_entry(&records).unwrap().0, 0);
    }

    #[test]
    fn test_last_change_from_zero_is_undefined() {
        let records = history(&["500", "0", "900"]);
        assert_eq!(last_change_percent(&records), Some(PercentChange::Undefined));
    }

    #[test]
    fn test_negative_net_salaries_are_handled() {
        let records = history(&["-100", "50"]);

        assert_eq!(min_entry(&records).unwrap().1.net_salary, dec("-100"));
        assert_eq!(average(&records), Some(dec("-25")));
    }

    #[test]
    fn test_average_of_huge_amounts_does_not_overflow() {
        let half_max = Decimal::MAX / Decimal::from(2);
        let records: Vec<SalaryResult> = (1..=3)
            .map(|month| result_with_net(half_max, 2026, month))
            .collect();

        let avg = average(&records).unwrap();
        assert!((avg - half_max).abs() <= Decimal::from(10));
        assert_eq!(summarize(&records).unwrap().count, 3);
    }

    #[test]
    fn test_summarize_collects_everything() {
        let records = history(&["1000", "1200", "900"]);
        let stats = summarize(&records).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.max_index, 1);
        assert_eq!(stats.max_entry.calculation_id, records[1].calculation_id);
        assert_eq!(stats.min_index, 2);
        assert_eq!(stats.min_entry.calculation_id, records[2].calculation_id);
        assert_eq!(stats.last_change, Some(PercentChange::Value(dec("-25"))));
        assert!((stats.average_net_salary - dec("1033.33")).abs() <= dec("0.01"));
    }
}
