//! Error types for the guard salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input, loading
//! configuration, and querying the calculation history.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the guard salary engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use guard_salary::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A salary input field was outside its accepted range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A month/year search period could not be understood.
    #[error("Invalid period '{value}': {message}")]
    InvalidPeriod {
        /// The rejected period text or value.
        value: String,
        /// A description of what made the period invalid.
        message: String,
    },

    /// A record passed for comparison is not part of the history.
    #[error("Calculation {calculation_id} is not present in the history")]
    InvalidReference {
        /// The identifier of the missing record.
        calculation_id: Uuid,
    },

    /// A history position was outside the current history.
    #[error("History index {index} is out of range (history holds {len} records)")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The number of records currently held.
        len: usize,
    },

    /// History could not be exported or imported.
    #[error("History serialization failed: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },
}

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::Serialization {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
