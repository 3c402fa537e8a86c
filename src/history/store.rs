//! Bounded FIFO store of salary results.

use std::collections::VecDeque;

use tracing::debug;
use uuid::Uuid;

use crate::config::{DEFAULT_HISTORY_CAPACITY, EngineConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryResult;

/// An ordered, capacity-bounded history of salary results.
///
/// Records are kept oldest first. Once the store is full, appending a record
/// evicts exactly the oldest one, so the length never exceeds the capacity
/// and the remaining records keep their order.
///
/// The store owns its records. Readers get clones through
/// [`HistoryStore::snapshot`] and [`HistoryStore::get`].
///
/// # Example
///
/// ```
/// use guard_salary::calculation::calculate_salary;
/// use guard_salary::history::HistoryStore;
/// use guard_salary::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let mut history = HistoryStore::new(2).unwrap();
/// for base in [10000, 20000, 30000] {
///     let input = SalaryInput::new(Decimal::from(base), 22, 0, 0, 0, false).unwrap();
///     history.append(calculate_salary(&input));
/// }
///
/// let snapshot = history.snapshot();
/// assert_eq!(snapshot.len(), 2);
/// assert_eq!(snapshot[0].input.base_salary(), Decimal::from(20000));
/// ```
#[derive(Debug, Clone)]
pub struct HistoryStore {
    capacity: usize,
    records: VecDeque<SalaryResult>,
}

impl HistoryStore {
    /// Creates an empty store holding at most `capacity` records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `capacity` is zero.
    pub fn new(capacity: usize) -> EngineResult<Self> {
        if capacity == 0 {
            return Err(EngineError::InvalidConfig {
                field: "history.capacity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        })
    }

    /// Creates an empty store sized from the engine configuration.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        Self::new(config.history.capacity)
    }

    /// Appends a record, evicting the oldest one first if the store is full.
    ///
    /// Returns the evicted record, if any.
    pub fn append(&mut self, record: SalaryResult) -> Option<SalaryResult> {
        let evicted = if self.records.len() >= self.capacity {
            self.records.pop_front()
        } else {
            None
        };

        if let Some(old) = &evicted {
            debug!(
                evicted_id = %old.calculation_id,
                capacity = self.capacity,
                "History full, evicted oldest calculation"
            );
        }

        self.records.push_back(record);
        evicted
    }

    /// Returns an independent copy of all records, oldest first.
    pub fn snapshot(&self) -> Vec<SalaryResult> {
        self.records.iter().cloned().collect()
    }

    /// Returns a copy of the record at `index` (0 is the oldest).
    pub fn get(&self, index: usize) -> Option<SalaryResult> {
        self.records.get(index).cloned()
    }

    /// Returns true if a record with the given id is held.
    pub fn contains(&self, calculation_id: Uuid) -> bool {
        self.records
            .iter()
            .any(|record| record.calculation_id == calculation_id)
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serializes the records, oldest first, as a JSON array.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Rebuilds a store from a JSON array of records.
    ///
    /// Records are appended in array order, so a list longer than `capacity`
    /// keeps only its last `capacity` entries.
    pub fn from_json(capacity: usize, json: &str) -> EngineResult<Self> {
        let records: Vec<SalaryResult> = serde_json::from_str(json)?;
        let mut store = Self::new(capacity)?;
        for record in records {
            store.append(record);
        }
        Ok(store)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            records: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
        }
    }
}
