//! Linear lookups over a history snapshot.
//!
//! Both searches keep the snapshot's chronological order and return an
//! empty list, not an error, when nothing matches.

use rust_decimal::Decimal;

use crate::models::{Period, SalaryResult};

/// Returns every record whose net salary is at least `threshold`.
///
/// # Example
///
/// ```
/// use guard_salary::search::find_by_minimum_amount;
/// use rust_decimal::Decimal;
///
/// assert!(find_by_minimum_amount(&[], Decimal::from(1000)).is_empty());
/// ```
pub fn find_by_minimum_amount(records: &[SalaryResult], threshold: Decimal) -> Vec<SalaryResult> {
    records
        .iter()
        .filter(|record| record.net_salary >= threshold)
        .cloned()
        .collect()
}

/// Returns every record calculated within the given calendar month.
pub fn find_by_month(records: &[SalaryResult], period: Period) -> Vec<SalaryResult> {
    records
        .iter()
        .filter(|record| period.contains(&record.timestamp))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::result_with_net;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn nets(records: &[SalaryResult]) -> Vec<Decimal> {
        records.iter().map(|r| r.net_salary).collect()
    }

    fn reference_history() -> Vec<SalaryResult> {
        vec![
            result_with_net(dec("1000"), 2026, 1),
            result_with_net(dec("1200"), 2026, 2),
            result_with_net(dec("900"), 2026, 3),
        ]
    }

    #[test]
    fn test_minimum_amount_returns_only_matching_record() {
        let records = reference_history();
        let found = find_by_minimum_amount(&records, dec("1100"));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].calculation_id, records[1].calculation_id);
    }

    #[test]
    fn test_minimum_amount_is_inclusive_and_ordered() {
        let records = reference_history();
        let found = find_by_minimum_amount(&records, dec("900"));

        assert_eq!(nets(&found), vec![dec("1000"), dec("1200"), dec("900")]);
    }

    #[test]
    fn test_minimum_amount_with_no_match_is_empty() {
        assert!(find_by_minimum_amount(&reference_history(), dec("5000")).is_empty());
    }

    #[test]
    fn test_find_by_month_matches_month_and_year() {
        let records = vec![
            result_with_net(dec("1000"), 2025, 2),
            result_with_net(dec("1100"), 2026, 2),
            result_with_net(dec("1200"), 2026, 3),
            result_with_net(dec("1300"), 2026, 2),
        ];

        let found = find_by_month(&records, Period::new(2, 2026).unwrap());
        assert_eq!(nets(&found), vec![dec("1100"), dec("1300")]);
    }

    #[test]
    fn test_find_by_month_with_no_match_is_empty() {
        let found = find_by_month(&reference_history(), Period::new(7, 2026).unwrap());
        assert!(found.is_empty());
    }

    #[test]
    fn test_searches_on_empty_history() {
        assert!(find_by_minimum_amount(&[], Decimal::ZERO).is_empty());
        assert!(find_by_month(&[], Period::new(1, 2026).unwrap()).is_empty());
    }
}
