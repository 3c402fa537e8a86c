//! Configuration types for the guard salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Salary rates are
//! fixed by the engine and deliberately absent here.

use serde::{Deserialize, Serialize};

/// Number of calculations kept in history when no configuration says otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// History settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of calculations retained. Must be at least 1.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use guard_salary::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.history.capacity, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// History settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl EngineConfig {
    /// Creates a configuration with the given history capacity.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: HistoryConfig { capacity },
        }
    }
}
