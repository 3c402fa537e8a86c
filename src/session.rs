//! Calculation session.
//!
//! A [`SalarySession`] is the explicitly owned driver of the engine: it runs
//! calculations, records them in its [`HistoryStore`], and answers analytics
//! and search queries from snapshots of that history. [`SharedSession`] wraps
//! a session behind a single lock for callers that need to share one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::analytics::{self, ComparisonReport, HistoryStatistics, TrendPoint};
use crate::calculation::calculate_salary_at;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::history::HistoryStore;
use crate::models::{Period, SalaryInput, SalaryResult};
use crate::search;

/// Runs salary calculations and keeps their bounded history.
///
/// # Example
///
/// ```
/// use guard_salary::models::SalaryInput;
/// use guard_salary::session::SalarySession;
/// use rust_decimal::Decimal;
///
/// let mut session = SalarySession::new(6).unwrap();
/// let input = SalaryInput::new(Decimal::from(30000), 22, 5, 10, 12, false).unwrap();
/// let result = session.calculate(&input);
///
/// assert_eq!(session.count(), 1);
/// assert_eq!(session.history()[0].calculation_id, result.calculation_id);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalarySession {
    history: HistoryStore,
}

impl SalarySession {
    /// Creates a session whose history holds at most `capacity` records.
    pub fn new(capacity: usize) -> EngineResult<Self> {
        Ok(Self::with_history(HistoryStore::new(capacity)?))
    }

    /// Creates a session sized from the engine configuration.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        Ok(Self::with_history(HistoryStore::from_config(config)?))
    }

    /// Creates a session around an existing history, e.g. one restored
    /// with [`HistoryStore::from_json`].
    pub fn with_history(history: HistoryStore) -> Self {
        Self { history }
    }

    /// Calculates a salary now and records it in the history.
    pub fn calculate(&mut self, input: &SalaryInput) -> SalaryResult {
        self.calculate_at(input, Utc::now())
    }

    /// Calculates a salary stamped with `timestamp` and records it.
    pub fn calculate_at(&mut self, input: &SalaryInput, timestamp: DateTime<Utc>) -> SalaryResult {
        let result = calculate_salary_at(input, timestamp);
        self.history.append(result.clone());

        info!(
            calculation_id = %result.calculation_id,
            net_salary = %result.net_salary.round_dp(2),
            history_count = self.history.count(),
            "Salary calculation recorded"
        );

        result
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<SalaryResult> {
        self.history.snapshot()
    }

    /// The underlying history store.
    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    /// Number of calculations currently held.
    pub fn count(&self) -> usize {
        self.history.count()
    }

    /// Statistics over the history, or `None` when it is empty.
    pub fn statistics(&self) -> Option<HistoryStatistics> {
        analytics::summarize(&self.history.snapshot())
    }

    /// Period-over-period changes across the history.
    pub fn trend(&self) -> Vec<TrendPoint> {
        analytics::period_trend(&self.history.snapshot()).collect()
    }

    /// Compares the records at two zero-based history positions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] if either position is not in
    /// the current history.
    pub fn compare_by_index(&self, first: usize, second: usize) -> EngineResult<ComparisonReport> {
        let snapshot = self.history.snapshot();
        let len = snapshot.len();

        let lookup = |index: usize| {
            snapshot.get(index).ok_or_else(|| {
                warn!(index, len, "Comparison index outside history");
                EngineError::IndexOutOfRange { index, len }
            })
        };

        let first = lookup(first)?;
        let second = lookup(second)?;
        analytics::compare(&snapshot, first, second)
    }

    /// Compares two records, both of which must still be in the history.
    pub fn compare(
        &self,
        first: &SalaryResult,
        second: &SalaryResult,
    ) -> EngineResult<ComparisonReport> {
        analytics::compare(&self.history.snapshot(), first, second)
    }

    /// Records with a net salary of at least `threshold`, oldest first.
    pub fn find_by_minimum_amount(&self, threshold: Decimal) -> Vec<SalaryResult> {
        search::find_by_minimum_amount(&self.history.snapshot(), threshold)
    }

    /// Records calculated in the given month, oldest first.
    pub fn find_by_month(&self, period: Period) -> Vec<SalaryResult> {
        search::find_by_month(&self.history.snapshot(), period)
    }
}

/// A [`SalarySession`] shared behind one mutex.
///
/// Appends and snapshots both run under the lock, and snapshots are full
/// copies, so readers never observe a partially updated history.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<SalarySession>>,
}

impl SharedSession {
    /// Wraps a session for sharing.
    pub fn new(session: SalarySession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Appends complete before anything that can panic, so a poisoned
    // session is still consistent.
    fn lock(&self) -> MutexGuard<'_, SalarySession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Calculates a salary now and records it.
    pub fn calculate(&self, input: &SalaryInput) -> SalaryResult {
        self.lock().calculate(input)
    }

    /// Calculates a salary stamped with `timestamp` and records it.
    pub fn calculate_at(&self, input: &SalaryInput, timestamp: DateTime<Utc>) -> SalaryResult {
        self.lock().calculate_at(input, timestamp)
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<SalaryResult> {
        self.lock().history()
    }

    /// Number of calculations currently held.
    pub fn count(&self) -> usize {
        self.lock().count()
    }

    /// Statistics over the history, or `None` when it is empty.
    pub fn statistics(&self) -> Option<HistoryStatistics> {
        self.lock().statistics()
    }

    /// Period-over-period changes across the history.
    pub fn trend(&self) -> Vec<TrendPoint> {
        self.lock().trend()
    }

    /// Compares the records at two zero-based history positions.
    pub fn compare_by_index(&self, first: usize, second: usize) -> EngineResult<ComparisonReport> {
        self.lock().compare_by_index(first, second)
    }

    /// Records with a net salary of at least `threshold`, oldest first.
    pub fn find_by_minimum_amount(&self, threshold: Decimal) -> Vec<SalaryResult> {
        self.lock().find_by_minimum_amount(threshold)
    }

    /// Records calculated in the given month, oldest first.
    pub fn find_by_month(&self, period: Period) -> Vec<SalaryResult> {
        self.lock().find_by_month(period)
    }
}
